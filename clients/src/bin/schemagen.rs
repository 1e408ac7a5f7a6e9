//! `schemagen`: generates Rust source from schema.org vocabularies.
//!
//! Reads one or more JSON-LD vocabulary files, resolves the configured types
//! into classes, interfaces, and enumerations, and writes them below the
//! output directory.
//!
//! **Usage:**
//! ```
//! schemagen --vocab <file.jsonld>... [--config <file.toml|file.json>] [--goodrelations <names.txt>] [--out <dir>]
//! ```
//!
//! Diagnostics are logged to stderr; set `RUST_LOG` to change verbosity.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use schemagen_codegen::{Config, Diagnostics, GeneratorRegistry, Run};
use schemagen_vocab::{jsonld, CardinalityIndex, GoodRelationsBridge, Ontology};

/// Generate Rust source from schema.org vocabularies.
#[derive(Parser)]
#[command(
    name = "schemagen",
    about = "Generate Rust entities and enumerations from schema.org vocabularies"
)]
struct Args {
    /// JSON-LD vocabulary files, in priority order.
    #[arg(long = "vocab", required = true, num_args = 1..)]
    vocabs: Vec<PathBuf>,

    /// Configuration file (`.toml` or `.json`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// GoodRelations property list (one name per line, optional cardinality).
    #[arg(long)]
    goodrelations: Option<PathBuf>,

    /// Output directory; overrides the configured one.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let registry = GeneratorRegistry::builtin();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out) = args.out {
        config.output = out;
    }
    config.validate(&registry)?;

    let sources = args
        .vocabs
        .iter()
        .map(|path| {
            jsonld::load(path).with_context(|| format!("failed to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    let ontology = Ontology::new(sources);

    let bridge = match &args.goodrelations {
        Some(path) => GoodRelationsBridge::load(path)?,
        None => {
            if config.check_is_good_relations {
                tracing::warn!("checkIsGoodRelations is set but no --goodrelations list was given");
            }
            GoodRelationsBridge::default()
        }
    };
    let cardinalities = CardinalityIndex::build(&ontology, &bridge);

    println!(
        "Loaded {} vocabulary source(s): {} types, {} properties, {} instances",
        ontology.sources().len(),
        ontology.type_count(),
        ontology.property_count(),
        ontology.instance_count()
    );

    let diagnostics = Diagnostics::new();
    let run = Run {
        ontology: &ontology,
        cardinalities: &cardinalities,
        bridge: &bridge,
        config: &config,
        registry: &registry,
    };
    let report = run.generate(&diagnostics)?;

    println!(
        "Generated {} classes, {} interfaces, {} enums, {} fields, {} constants",
        report.class_count,
        report.interface_count,
        report.enum_count,
        report.field_count,
        report.const_count
    );
    println!(
        "Diagnostics: {} info, {} warning, {} error, {} critical",
        report.info_count, report.warning_count, report.error_count, report.critical_count
    );
    println!("Files written ({}):", report.files.len());
    for file in &report.files {
        println!("  {}", file.display());
    }

    println!("Generation complete.");
    Ok(())
}
