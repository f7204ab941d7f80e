//! CLI settings
//!
//! Layered, lowest priority first: built-in defaults, an optional TOML file
//! (`webconcepts.toml` or `--config`), `WEBCONCEPTS__*` environment
//! variables, then command-line flags (applied by the caller).

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use webconcepts_codegen::generators::GeneratorConfig;

pub const DEFAULT_CONFIG_FILE: &str = "webconcepts.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the concept corpus
    pub corpus: PathBuf,
    /// Directory receiving the generated files
    pub out_dir: PathBuf,
    pub logging: LoggingConfig,
    pub codegen: GeneratorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("build/concepts.json"),
            out_dir: PathBuf::from("src"),
            logging: LoggingConfig::default(),
            codegen: GeneratorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this tool's own targets (overridden by `RUST_LOG`)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings; an explicit `path` must exist, the default file may not.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("WEBCONCEPTS")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("codegen.ietf_hosts")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.codegen.wrap_width == 0 {
            anyhow::bail!("codegen.wrap_width must be greater than zero");
        }
        if self.codegen.ietf_hosts.iter().any(|h| h.trim().is_empty()) {
            anyhow::bail!("codegen.ietf_hosts must not contain empty host names");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert!(Settings::load(Some(missing.as_path())).is_err());

        let settings = Settings::default();
        assert_eq!(settings.corpus, PathBuf::from("build/concepts.json"));
        assert_eq!(settings.out_dir, PathBuf::from("src"));
        assert_eq!(settings.logging.level, "info");
        settings.validate().unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webconcepts.toml");
        fs::write(
            &path,
            r#"
corpus = "data/concepts.json"

[logging]
json = true

[codegen]
strict_labels = true
ietf_hosts = ["datatracker.ietf.org", "httpwg.org"]

[codegen.w3c_reports]
"edit-vocab" = "W3C Editing Vocabulary"
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.corpus, PathBuf::from("data/concepts.json"));
        assert_eq!(settings.out_dir, PathBuf::from("src"));
        assert!(settings.logging.json);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.codegen.strict_labels);
        assert!(settings.codegen.generate_docs);
        assert_eq!(
            settings.codegen.ietf_hosts,
            vec!["datatracker.ietf.org", "httpwg.org"]
        );
        assert_eq!(
            settings.codegen.w3c_reports.get("edit-vocab").map(String::as_str),
            Some("W3C Editing Vocabulary")
        );
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut settings = Settings::default();
        settings.codegen.wrap_width = 0;
        assert!(settings.validate().is_err());
    }
}
