//! Web Concepts Code Generator
//!
//! Generates TypeScript literal types for HTTP vocabulary (methods, status
//! codes, headers) from a webconcepts.info JSON corpus, with documentation
//! comments linking every value to the specifications that define it.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Parser**: Loads the concept corpus into a [`ConceptRegistry`]
//! 2. **IR (Intermediate Representation)**: Concepts, values and their sourced details
//! 3. **Generators**: Language-specific code generation from the IR, with
//!    link labels resolved by [`labels::LabelResolver`]
//!
//! Each concept kind is an independent run: a failure in one kind does not
//! prevent the others from being generated.

pub mod docs;
pub mod error;
pub mod generators;
pub mod http;
pub mod ir;
pub mod labels;
pub mod parser;
pub mod strings;
pub mod utils;

use std::path::{Path, PathBuf};
use std::time::Instant;

pub use error::{Error, Result};
use generators::typescript::{GeneratedFile, TypeScriptGenerator};
use generators::{ConceptKind, Generator, GeneratorConfig};
use ir::ConceptRegistry;

/// Main entry point for code generation
pub struct CodeGenerator {
    registry: ConceptRegistry,
}

impl CodeGenerator {
    /// Create a new code generator from a corpus file
    pub fn from_path(corpus: &Path) -> Result<Self> {
        let registry = parser::load_concepts(corpus)?;
        Ok(Self { registry })
    }

    /// Create a new code generator from an already loaded registry
    pub fn from_registry(registry: ConceptRegistry) -> Self {
        Self { registry }
    }

    /// Get the concept registry
    pub fn registry(&self) -> &ConceptRegistry {
        &self.registry
    }

    /// Generate code for one concept kind
    pub fn generate<G: Generator>(&self, kind: ConceptKind, generator: &G) -> Result<G::Output> {
        generator.generate(kind, &self.registry)
    }

    /// Generate one kind and write (or check) its artifact, logging a summary.
    pub fn run<G>(
        &self,
        kind: ConceptKind,
        generator: &G,
        output_dir: &Path,
        mode: OutputMode,
    ) -> RunOutcome
    where
        G: Generator<Output = GeneratedFile>,
    {
        let span = tracing::info_span!("generate", kind = %kind);
        let _enter = span.enter();
        let started = Instant::now();

        let result = self.generate(kind, generator).and_then(|file| {
            let path = match mode {
                OutputMode::Write => utils::write_artifact(output_dir, &file)?,
                OutputMode::Check => utils::check_artifact(output_dir, &file)?,
            };
            Ok(RunSummary {
                path,
                value_count: file.value_count,
            })
        });

        let verb = match mode {
            OutputMode::Write => "Exported",
            OutputMode::Check => "Verified",
        };
        match &result {
            Ok(summary) => tracing::info!(
                path = %summary.path.display(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "{} {} {}",
                verb,
                summary.value_count,
                kind.noun()
            ),
            Err(e) => tracing::error!(error = %e, "Generation failed"),
        }

        RunOutcome { kind, result }
    }
}

/// What to do with rendered artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Replace the files in the output directory
    #[default]
    Write,
    /// Only compare against the files in the output directory
    Check,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub value_count: usize,
}

/// Result of one concept kind's run
#[derive(Debug)]
pub struct RunOutcome {
    pub kind: ConceptKind,
    pub result: Result<RunSummary>,
}

/// Convenience helper to run the TypeScript generator for several kinds.
///
/// A corpus that cannot be loaded fails the whole call; failures of
/// individual kinds are reported in the returned outcomes.
pub fn generate_typescript(
    corpus: &Path,
    output_dir: &Path,
    kinds: &[ConceptKind],
    config: GeneratorConfig,
    mode: OutputMode,
) -> Result<Vec<RunOutcome>> {
    let codegen = CodeGenerator::from_path(corpus)?;
    let generator = TypeScriptGenerator::new(config);

    Ok(kinds
        .iter()
        .map(|&kind| codegen.run(kind, &generator, output_dir, mode))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labels::{HostAdapter, LabelResolver};

    const CORPUS: &str = r#"[{
        "concept": "http-method",
        "id": "http://webconcepts.info/concepts/http-method/",
        "name-singular": "HTTP Request Method",
        "name-plural": "HTTP Request Methods",
        "values": [{
            "value": "GET",
            "concept": "http://webconcepts.info/concepts/http-method/",
            "id": "http://webconcepts.info/concepts/http-method/GET",
            "details": [{
                "description": "Transfer a current representation of the target resource.",
                "documentation": "https://datatracker.ietf.org/doc/html/rfc9110#section-9.3.1",
                "specification": "http://webconcepts.info/specs/IETF/RFC/9110",
                "spec-name": "RFC 9110"
            }]
        }]
    }]"#;

    #[test]
    fn test_generate_with_injected_resolver() {
        let codegen = CodeGenerator::from_registry(parser::parse_concepts(CORPUS).unwrap());
        assert_eq!(codegen.registry().len(), 1);

        // without the IETF adapter the spec-name is used for both links
        let generator = TypeScriptGenerator::with_resolver(
            GeneratorConfig::default(),
            LabelResolver::new(vec![HostAdapter::Wicg]),
        );
        let file = codegen.generate(ConceptKind::HttpMethod, &generator).unwrap();
        assert!(file.contents.contains(
            "@see [Documentation → RFC 9110](https://datatracker.ietf.org/doc/html/rfc9110#section-9.3.1)"
        ));
    }

    #[test]
    fn test_run_reports_missing_concept() {
        let dir = tempfile::tempdir().unwrap();
        let codegen = CodeGenerator::from_registry(parser::parse_concepts(CORPUS).unwrap());
        let generator = TypeScriptGenerator::new_default();

        let outcome = codegen.run(
            ConceptKind::HttpStatusCode,
            &generator,
            dir.path(),
            OutputMode::Write,
        );
        assert_eq!(outcome.kind, ConceptKind::HttpStatusCode);
        assert!(matches!(outcome.result, Err(Error::ConceptNotFound(_))));

        let outcome = codegen.run(ConceptKind::HttpMethod, &generator, dir.path(), OutputMode::Write);
        assert_eq!(outcome.result.unwrap().value_count, 1);
    }
}
