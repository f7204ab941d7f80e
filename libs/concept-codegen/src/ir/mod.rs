//! Intermediate Representation (IR)
//!
//! Concepts as described by the webconcepts.info JSON format
//! (<https://webconcepts.info/JSON-concepts>). The corpus is loaded once per
//! generation run and never mutated afterwards.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// A named category of web-protocol vocabulary (e.g. `http-method`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// The concept's name as it is referred to in the source data
    pub concept: String,
    /// Concept identifier, also browsable
    pub id: Url,
    #[serde(rename = "name-singular")]
    pub name_singular: String,
    #[serde(rename = "name-plural")]
    pub name_plural: String,
    /// Registry of all well-known values, if one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<Url>,
    /// All known values, in corpus order
    pub values: Vec<ConceptValue>,
}

/// One concrete value of a concept (e.g. `GET`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptValue {
    pub value: String,
    /// Identifier of the owning concept
    pub concept: Url,
    pub id: Url,
    /// Every known description of the value
    pub details: Vec<ConceptValueDetail>,
}

impl ConceptValue {
    /// The detail whose description documents the value.
    pub fn primary_detail(&self) -> Result<&ConceptValueDetail> {
        self.details.first().ok_or_else(|| Error::EmptyDetails {
            value: self.value.clone(),
        })
    }
}

/// One sourced definition of a concept value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptValueDetail {
    pub description: String,
    /// Where the value is explained, possibly with a fragment locator
    pub documentation: Url,
    /// Canonical specification identifier
    pub specification: Url,
    /// Short name usable as a link label
    #[serde(rename = "spec-name")]
    pub spec_name: String,
}

/// The loaded corpus, in document order
#[derive(Debug, Clone, Default)]
pub struct ConceptRegistry {
    concepts: Vec<Concept>,
}

impl ConceptRegistry {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    /// Find a concept by its exact name.
    pub fn find_concept(&self, name: &str) -> Result<&Concept> {
        self.concepts
            .iter()
            .find(|c| c.concept == name)
            .ok_or_else(|| Error::ConceptNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
