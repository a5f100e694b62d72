//! Healthmate — symptom cause estimation with emergency red flags.
//! Entry point for the command-line binary.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use healthmate_engine::SymptomEngine;
use healthmate_kb::load_knowledge;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::{AnalysisReport, SymptomRequest};

#[derive(Debug, Parser)]
#[command(name = "healthmate", version, about = "Estimate probable causes for reported symptoms")]
struct Cli {
    /// Reported symptoms, e.g. `chest_pain "pain radiating left arm" sweating`
    symptoms: Vec<String>,

    /// Path to healthmate.toml (overrides HEALTHMATE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Age in years (0-120)
    #[arg(long)]
    age: Option<u32>,

    #[arg(long)]
    sex: Option<String>,

    /// How long the symptoms have lasted, free text
    #[arg(long)]
    duration: Option<String>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the response.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthmate=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Healthmate v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = config::Config::load(cli.config.as_deref())?;
    info!(
        knowledge_base = %config.data.knowledge_base.display(),
        red_flags = %config.data.red_flags.display(),
        "Configuration loaded"
    );

    // Data problems are fatal: never answer from a partial knowledge base.
    let knowledge = load_knowledge(&config.data.knowledge_base, &config.data.red_flags)
        .await
        .context("Could not load knowledge data")?;
    let engine = SymptomEngine::with_params(knowledge, config.scoring)?;

    let request = SymptomRequest {
        symptoms: cli.symptoms,
        age: cli.age,
        sex: cli.sex,
        duration: cli.duration,
    };
    let symptoms = request.validated_symptoms()?;
    info!(
        symptoms = symptoms.len(),
        age = ?request.age,
        sex = ?request.sex,
        duration = ?request.duration,
        "Analysing request"
    );

    let result = engine.analyze(&symptoms);
    if result.is_no_match() {
        warn!("No symptom group matched the reported symptoms");
    }

    let report = AnalysisReport::from_result(result, &config.output);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
