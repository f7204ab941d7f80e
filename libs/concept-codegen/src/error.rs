//! Error types for concept code generation

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read concept corpus {}: {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse concept corpus {}: {source}", path.display())]
    CorpusParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid concept corpus: {0}")]
    InvalidCorpus(String),

    #[error("concept not found: {0}")]
    ConceptNotFound(String),

    #[error("concept value '{value}' has no details to document")]
    EmptyDetails { value: String },

    #[error("cannot resolve label for {uri}: {reason}")]
    LabelResolution { uri: String, reason: String },

    #[error("type name {name} for value '{value}' is already declared")]
    DuplicateTypeName { name: String, value: String },

    #[error("invalid HTTP status code '{0}' (expected 100..=599)")]
    InvalidStatusCode(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("generated file is out of date: {}", path.display())]
    StaleArtifact { path: PathBuf },
}
