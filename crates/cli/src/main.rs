use anyhow::Context;
use clap::{Parser, Subcommand};
use medware_core::config::{path_from_env_value, SYMPTOM_TABLE_ENV};
use medware_core::{predict, CoreConfig, PredictionResult, SymptomConditionTable, SymptomSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medware")]
#[command(about = "Medware symptom predictor CLI")]
struct Cli {
    /// YAML symptom table to use instead of the embedded one
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest likely conditions for the given symptoms
    Predict {
        /// Symptoms, one per argument (quote multi-word symptoms)
        symptoms: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the symptoms the predictor knows about
    Symptoms,
    /// Validate a YAML symptom table
    CheckTable {
        /// Path to the table file
        path: PathBuf,
    },
}

/// Adds each symptom in turn, reporting and skipping the ones that are rejected.
fn collect_symptoms(inputs: &[String]) -> SymptomSet {
    let mut set = SymptomSet::new();
    for input in inputs {
        if let Err(err) = set.add(input) {
            eprintln!("Skipping '{}': {}", input.trim(), err);
        }
    }
    set
}

fn render(result: &PredictionResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(result)?)
    } else {
        Ok(result.to_string())
    }
}

fn load_table(table_path: Option<PathBuf>) -> anyhow::Result<Arc<SymptomConditionTable>> {
    let cfg = CoreConfig::new(table_path, None)?;
    cfg.load_table().context("failed to load symptom table")
}

fn predict_command(
    table_path: Option<PathBuf>,
    symptoms: &[String],
    json: bool,
) -> anyhow::Result<String> {
    let table = load_table(table_path)?;
    let set = collect_symptoms(symptoms);
    tracing::debug!("predicting over {} of {} symptoms", set.len(), symptoms.len());
    render(&predict(&set, &table), json)
}

fn symptoms_command(table_path: Option<PathBuf>) -> anyhow::Result<String> {
    let table = load_table(table_path)?;
    let lines: Vec<String> = table
        .entries()
        .iter()
        .map(|entry| format!("{}: {}", entry.symptom, entry.conditions.join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

fn check_table_command(path: &Path) -> anyhow::Result<String> {
    let table = SymptomConditionTable::load(path)
        .with_context(|| format!("invalid symptom table {}", path.display()))?;
    Ok(format!("OK: {} symptoms in {}", table.len(), path.display()))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medware=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let table_path = cli
        .table
        .or_else(|| path_from_env_value(std::env::var(SYMPTOM_TABLE_ENV).ok()));

    let output = match cli.command {
        Some(Commands::Predict { symptoms, json }) => {
            predict_command(table_path, &symptoms, json)?
        }
        Some(Commands::Symptoms) => symptoms_command(table_path)?,
        Some(Commands::CheckTable { path }) => check_table_command(&path)?,
        None => "Use 'medware --help' for commands".to_string(),
    };
    println!("{output}");

    Ok(())
}
