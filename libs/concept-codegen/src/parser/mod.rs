//! Parser for the concept corpus
//!
//! Reads the JSON corpus and builds a [`ConceptRegistry`]. URIs are parsed
//! during deserialization, so a malformed link is reported here rather than
//! while rendering.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ir::{Concept, ConceptRegistry};

/// Load and validate the corpus at `path`.
pub fn load_concepts(path: &Path) -> Result<ConceptRegistry> {
    let data = fs::read_to_string(path).map_err(|source| Error::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;

    let concepts: Vec<Concept> =
        serde_json::from_str(&data).map_err(|source| Error::CorpusParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&concepts)?;
    tracing::debug!(path = %path.display(), concepts = concepts.len(), "Loaded concept corpus");

    Ok(ConceptRegistry::new(concepts))
}

/// Parse a corpus held in memory.
pub fn parse_concepts(data: &str) -> Result<ConceptRegistry> {
    let concepts: Vec<Concept> =
        serde_json::from_str(data).map_err(|source| Error::CorpusParse {
            path: "<memory>".into(),
            source,
        })?;

    validate(&concepts)?;
    Ok(ConceptRegistry::new(concepts))
}

fn validate(concepts: &[Concept]) -> Result<()> {
    for concept in concepts {
        for value in &concept.values {
            if let Some(i) = value
                .details
                .iter()
                .position(|d| d.spec_name.trim().is_empty())
            {
                return Err(Error::InvalidCorpus(format!(
                    "{} value '{}' detail #{} has an empty spec-name",
                    concept.concept, value.value, i
                )));
            }
        }
    }
    Ok(())
}
