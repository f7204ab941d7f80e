//! Code generators for concept corpora
//!
//! Each target language has its own module that implements the `Generator` trait.

pub mod typescript;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::docs::DEFAULT_WRAP_WIDTH;
use crate::error::Result;
use crate::ir::ConceptRegistry;

/// Trait that all language generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code for one concept kind from the registry
    fn generate(&self, kind: ConceptKind, registry: &ConceptRegistry) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Whether to generate documentation comments
    pub generate_docs: bool,
    /// Column at which value descriptions are wrapped
    pub wrap_width: usize,
    /// Fail on links whose label cannot be resolved
    pub strict_labels: bool,
    /// Hosts served by the IETF label adapter
    pub ietf_hosts: Vec<String>,
    /// Additional W3C report names, keyed by TR shortname
    pub w3c_reports: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
            strict_labels: false,
            ietf_hosts: vec!["datatracker.ietf.org".to_string()],
            w3c_reports: BTreeMap::new(),
        }
    }
}

/// The concept kinds with a dedicated generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConceptKind {
    HttpMethod,
    HttpStatusCode,
    HttpHeader,
}

impl ConceptKind {
    pub const ALL: [ConceptKind; 3] = [
        ConceptKind::HttpMethod,
        ConceptKind::HttpStatusCode,
        ConceptKind::HttpHeader,
    ];

    /// Concept name in the corpus
    pub fn concept_name(self) -> &'static str {
        match self {
            ConceptKind::HttpMethod => "http-method",
            ConceptKind::HttpStatusCode => "http-status-code",
            ConceptKind::HttpHeader => "http-header",
        }
    }

    /// Name of the generated file
    pub fn file_name(self) -> &'static str {
        match self {
            ConceptKind::HttpMethod => "httpMethods.ts",
            ConceptKind::HttpStatusCode => "httpStatusCodes.ts",
            ConceptKind::HttpHeader => "httpHeaders.ts",
        }
    }

    /// Plural noun used in run summaries
    pub fn noun(self) -> &'static str {
        match self {
            ConceptKind::HttpMethod => "HTTP methods",
            ConceptKind::HttpStatusCode => "HTTP status codes",
            ConceptKind::HttpHeader => "HTTP headers",
        }
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConceptKind::HttpMethod => "method",
            ConceptKind::HttpStatusCode => "status-code",
            ConceptKind::HttpHeader => "header",
        })
    }
}

impl FromStr for ConceptKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "method" | "http-method" => Ok(ConceptKind::HttpMethod),
            "status-code" | "http-status-code" => Ok(ConceptKind::HttpStatusCode),
            "header" | "http-header" => Ok(ConceptKind::HttpHeader),
            other => Err(format!(
                "unknown concept kind '{}' (expected method, status-code or header)",
                other
            )),
        }
    }
}
