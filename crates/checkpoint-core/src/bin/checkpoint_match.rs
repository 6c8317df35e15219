//! checkpoint-match CLI
//!
//! Runs the name matcher over exported case lists and prints JSON.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkpoint_core::similarity::{DEFAULT_LIMIT, DEFAULT_MIN_PERCENT};
use checkpoint_core::{CheckpointConfig, CheckpointError, ConfigError};
use checkpoint_domain::CaseRecord;

#[derive(Parser)]
#[command(
    name = "checkpoint-match",
    version,
    about = "Fuzzy name matching over checkpoint case records"
)]
struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank records whose field matches the query
    Match {
        /// JSON array of record objects
        records: PathBuf,
        query: String,
        #[arg(long, default_value = "name")]
        field: String,
        #[arg(long, default_value_t = DEFAULT_MIN_PERCENT)]
        min: f64,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Scan every record for the exact top matches
        #[arg(long)]
        exact_top: bool,
    },
    /// Best single match with its score breakdown
    Best {
        records: PathBuf,
        query: String,
        #[arg(long, default_value = "name")]
        field: String,
    },
    /// Score two strings directly
    Compare { text: String, query: String },
    /// Look for an earlier case of the same detainee
    Residence {
        /// JSON array of case records
        history: PathBuf,
        name: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(version = checkpoint_core::version(), "checkpoint-match starting");

    let config = load_config(cli.config.as_deref())?;

    let output = run(cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// An explicit `--config` must load; otherwise the default path is optional
fn load_config(path: Option<&Path>) -> Result<CheckpointConfig, ConfigError> {
    match path {
        Some(path) => CheckpointConfig::load(path),
        None => CheckpointConfig::load_or_default(),
    }
}

fn run(command: Command, config: &CheckpointConfig) -> Result<Value, CheckpointError> {
    let engine = config.engine();

    match command {
        Command::Match {
            records,
            query,
            field,
            min,
            limit,
            exact_top,
        } => {
            let records = load_records(&records)?;
            let matches = if exact_top {
                engine.find_top_matches(&records, field.as_str(), &query, min, limit)
            } else {
                engine.find_all_matches(&records, field.as_str(), &query, min, limit)
            };
            info!(count = matches.len(), "ranked matches");
            Ok(serde_json::to_value(&matches)?)
        }
        Command::Best {
            records,
            query,
            field,
        } => {
            let records = load_records(&records)?;
            let best = engine.find_most_similar(&records, field.as_str(), &query);
            Ok(serde_json::to_value(&best)?)
        }
        Command::Compare { text, query } => Ok(serde_json::to_value(engine.compare(&text, &query))?),
        Command::Residence { history, name } => {
            let content = std::fs::read_to_string(&history)?;
            let history: Vec<CaseRecord> = serde_json::from_str(&content)?;
            let found = config.residence_detector().detect(&history, &name);
            Ok(match found {
                Some(m) => json!({
                    "similarity": m.similarity,
                    "matched_words": m.matched_words,
                    "summary": m.summary(),
                }),
                None => Value::Null,
            })
        }
    }
}

fn load_records(path: &Path) -> Result<Vec<Value>, CheckpointError> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&content)?;
    info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
