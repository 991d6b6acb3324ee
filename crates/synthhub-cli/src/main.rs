//! `synthhub` command line interface.
//!
//! Subcommands cover the full snapshot workflow: generate-and-export,
//! plan inspection, bundle validation, and running the HTTP API.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use synthhub_api::ApiState;
use synthhub_core::records::SnapshotBundle;
use synthhub_core::{validate_bundle, DatasetSettings};
use synthhub_export::{export, Entity, ExportError, ExportOptions, Format};
use synthhub_generate::{describe_generation_plan, generate, GenerateError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bundle failed validation with {0} issue(s)")]
    Validation(usize),
}

#[derive(Parser, Debug)]
#[command(name = "synthhub", version, about = "Synthhub synthetic snapshot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a bundle and export its artifacts to disk.
    GenerateSnapshot(GenerateSnapshotArgs),
    /// Print the generation plan for the current settings.
    Plan,
    /// Validate a previously exported combined JSON document.
    Validate(ValidateArgs),
    /// Run the HTTP API server.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct GenerateSnapshotArgs {
    /// Output directory for the snapshot artifacts.
    #[arg(long, default_value = "data/snapshots/v0.1")]
    output_dir: PathBuf,
    /// Number of person records (vehicles and profiles follow one-to-one).
    #[arg(long, default_value_t = 5)]
    records: u64,
    /// Seed for the deterministic stream.
    #[arg(long, conflicts_with = "randomize")]
    seed: Option<u64>,
    /// Draw a fresh random seed instead of the default.
    #[arg(long, default_value_t = false)]
    randomize: bool,
    /// Entities to export; repeatable, defaults to all.
    #[arg(long = "entity", value_enum)]
    entities: Vec<EntityArg>,
    /// Formats to write; repeatable, defaults to csv and json.
    #[arg(long = "format", value_enum)]
    formats: Vec<FormatArg>,
    /// Skip profile derivation.
    #[arg(long, default_value_t = false)]
    no_profiles: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to a combined dataset JSON document.
    input: PathBuf,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Require this value in the x-api-key header.
    #[arg(long)]
    api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EntityArg {
    Persons,
    Vehicles,
    Profiles,
}

impl From<EntityArg> for Entity {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::Persons => Entity::Persons,
            EntityArg::Vehicles => Entity::Vehicles,
            EntityArg::Profiles => Entity::Profiles,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Format::Csv,
            FormatArg::Json => Format::Json,
            FormatArg::Ndjson => Format::Ndjson,
            FormatArg::Parquet => Format::Parquet,
        }
    }
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();
    let settings = DatasetSettings::default();

    match cli.command {
        Command::GenerateSnapshot(args) => run_generate_snapshot(&settings, args),
        Command::Plan => run_plan(&settings),
        Command::Validate(args) => run_validate(args),
        Command::Serve(args) => run_serve(settings, args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .ok();
}

fn run_generate_snapshot(
    settings: &DatasetSettings,
    args: GenerateSnapshotArgs,
) -> Result<(), CliError> {
    let seed = if args.randomize {
        Some(rand::rng().random_range(0..1_000_000_000))
    } else {
        args.seed
    };
    let resolved_seed = seed.unwrap_or(settings.default_seed);

    let bundle = generate(settings, args.records, seed, !args.no_profiles)?;

    let options = ExportOptions {
        entities: args.entities.into_iter().map(Entity::from).collect(),
        formats: if args.formats.is_empty() {
            ExportOptions::default().formats
        } else {
            args.formats.into_iter().map(Format::from).collect()
        },
        seed_hint: Some(resolved_seed),
    };
    let written = export(&bundle, &args.output_dir, &options)?;

    println!(
        "generated {} persons, {} vehicles, {} profiles (seed {resolved_seed})",
        bundle.metadata.record_count_persons,
        bundle.metadata.record_count_vehicles,
        bundle.metadata.record_count_profiles,
    );
    for path in written.values() {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn run_plan(settings: &DatasetSettings) -> Result<(), CliError> {
    for step in describe_generation_plan(settings) {
        println!("{step}");
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let bytes = fs::read(&args.input)?;
    let bundle: SnapshotBundle = serde_json::from_slice(&bytes)?;
    let (valid, issues) = validate_bundle(&bundle);
    for issue in &issues {
        eprintln!("issue: {issue}");
    }
    if valid {
        println!(
            "bundle is valid: {} persons, {} vehicles, {} profiles",
            bundle.persons.len(),
            bundle.vehicles.len(),
            bundle.profiles.len(),
        );
        Ok(())
    } else {
        Err(CliError::Validation(issues.len()))
    }
}

fn run_serve(settings: DatasetSettings, args: ServeArgs) -> Result<(), CliError> {
    let state = ApiState::new(settings, args.api_key);
    synthhub_api::run(state, &args.host, args.port)?;
    Ok(())
}
