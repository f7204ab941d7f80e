//! webconcepts - TypeScript type generator entry point
//!
//! `webconcepts generate` (also the default when no subcommand is given)
//! regenerates the HTTP method, status code and header declaration files.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;
use webconcepts_codegen::generators::ConceptKind;
use webconcepts_codegen::ir::ConceptValueDetail;
use webconcepts_codegen::labels::LabelResolver;
use webconcepts_codegen::{generate_typescript, OutputMode};

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "webconcepts", version, about = "Generate TypeScript types from web concepts")]
struct Cli {
    /// Configuration file (defaults to ./webconcepts.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level for webconcepts targets
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the TypeScript declaration files
    Generate(GenerateArgs),
    /// Print the label resolved for a documentation link
    Label(LabelArgs),
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Concept corpus (JSON)
    #[arg(long, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Output directory for generated files
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Only generate these kinds: method, status-code, header
    #[arg(long = "kind", value_name = "KIND")]
    kinds: Vec<ConceptKind>,

    /// Fail when a link label cannot be resolved
    #[arg(long)]
    strict: bool,

    /// Verify generated files are up to date instead of writing them
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Args)]
struct LabelArgs {
    /// Documentation URL of the concept value
    #[arg(long)]
    documentation: Url,

    /// Short specification name used as fallback
    #[arg(long)]
    spec_name: String,

    /// Include the section reference
    #[arg(long)]
    fragment: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        settings.logging.json = matches!(format, LogFormat::Json);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));
    if let Command::Generate(args) = &command {
        apply_generate_args(&mut settings, args);
    }

    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    logging::init_logging(&settings.logging)?;

    match command {
        Command::Generate(args) => generate(&settings, &args),
        Command::Label(args) => label(&settings, args),
    }
}

fn apply_generate_args(settings: &mut Settings, args: &GenerateArgs) {
    if let Some(corpus) = &args.corpus {
        settings.corpus = corpus.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        settings.out_dir = out_dir.clone();
    }
    if args.strict {
        settings.codegen.strict_labels = true;
    }
}

fn generate(settings: &Settings, args: &GenerateArgs) -> anyhow::Result<()> {
    let kinds: &[ConceptKind] = if args.kinds.is_empty() {
        &ConceptKind::ALL
    } else {
        &args.kinds
    };
    let mode = if args.check {
        OutputMode::Check
    } else {
        OutputMode::Write
    };

    tracing::info!(
        corpus = %settings.corpus.display(),
        out_dir = %settings.out_dir.display(),
        strict = settings.codegen.strict_labels,
        check = args.check,
        "Generating TypeScript types"
    );

    let outcomes = generate_typescript(
        &settings.corpus,
        &settings.out_dir,
        kinds,
        settings.codegen.clone(),
        mode,
    )
    .with_context(|| format!("Failed to load corpus {}", settings.corpus.display()))?;

    let failed: Vec<String> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.kind.to_string())
        .collect();

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} generation runs failed: {}",
            failed.len(),
            outcomes.len(),
            failed.join(", ")
        );
    }

    Ok(())
}

fn label(settings: &Settings, args: LabelArgs) -> anyhow::Result<()> {
    let resolver = LabelResolver::from_config(&settings.codegen);
    let detail = ConceptValueDetail {
        description: String::new(),
        specification: args.documentation.clone(),
        documentation: args.documentation,
        spec_name: args.spec_name,
    };

    let label = resolver.resolve_label(&detail, args.fragment)?;
    println!("{label}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "webconcepts",
            "generate",
            "--corpus",
            "data/concepts.json",
            "--kind",
            "method",
            "--kind",
            "header",
            "--strict",
        ])
        .unwrap();

        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.kinds, vec![ConceptKind::HttpMethod, ConceptKind::HttpHeader]);

        let mut settings = Settings::default();
        apply_generate_args(&mut settings, &args);
        assert_eq!(settings.corpus, PathBuf::from("data/concepts.json"));
        assert!(settings.codegen.strict_labels);
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["webconcepts", "generate", "--kind", "cookie"]).is_err());
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["webconcepts"]).unwrap();
        assert!(cli.command.is_none());
    }
}
