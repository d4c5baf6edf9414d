//! `invasive-risk`: score an alien plant species from the command line.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use input::FactorArgs;
use invasive_core::{LinguisticTerm, ModelKind};
use invasive_engine::{level_bounds, AssessmentReport, EngineConfig, RiskEngine};
use invasive_metrics::{record_outcome, AssessmentMetrics};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "invasive-risk")]
#[command(about = "Fuzzy invasiveness-risk scoring for alien plant species", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration (JSON); defaults apply to omitted fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print Prometheus metrics to stderr after the run
    #[arg(long, global = true)]
    metrics: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one species under a single model
    Assess {
        #[command(flatten)]
        factors: FactorArgs,

        /// Model I (equal weights) or II (expert weights)
        #[arg(long, default_value = "I")]
        model: ModelKind,
    },

    /// Assess one species under both models
    Compare {
        #[command(flatten)]
        factors: FactorArgs,
    },

    /// Print the linguistic term scale and level bands
    Scale,
}

fn init_tracing(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn load_engine(path: Option<&PathBuf>) -> Result<RiskEngine> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read engine config {}", path.display()))?;
            EngineConfig::from_json(&raw)
                .with_context(|| format!("load engine config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    RiskEngine::new(config).context("initialise risk engine")
}

fn run_models(
    engine: &RiskEngine,
    metrics: &AssessmentMetrics,
    factors: &FactorArgs,
    models: &[ModelKind],
) -> Result<()> {
    let input = factors.resolve()?;
    let species = input.species.as_deref().unwrap_or("unnamed species");

    let mut assessments = Vec::with_capacity(models.len());
    for model in models {
        let outcome = engine.assess(&input.dispersal, &input.linguistic, *model);
        if let Err(err) = &outcome {
            error!(%model, %err, "assessment refused");
        }
        record_outcome(metrics, &outcome);
        assessments.push(outcome.with_context(|| format!("assess {species} under {model}"))?);
    }

    let report = AssessmentReport::new(species, input.dispersal, input.linguistic, assessments);
    info!(report_id = %report.report_id, species, "report generated");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_scale(engine: &RiskEngine) {
    println!("{:<4} {:<16} {:>6} {:>6} {:>6}   band", "code", "label", "center", "left", "right");
    for term in LinguisticTerm::ALL {
        let t = engine.scale().term(term);
        let (lo, hi) = level_bounds(term);
        println!(
            "{:<4} {:<16} {:>6.2} {:>6.2} {:>6.2}   [{lo:.1}, {hi:.1}{}",
            term.code(),
            term.label(),
            t.center,
            t.left,
            t.right,
            if term == LinguisticTerm::ExtremelyHigh { "]" } else { ")" }
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, &cli.log_level);

    let engine = load_engine(cli.config.as_ref())?;
    let metrics = AssessmentMetrics::new()?;

    let result = match &cli.command {
        Commands::Assess { factors, model } => run_models(&engine, &metrics, factors, &[*model]),
        Commands::Compare { factors } => run_models(&engine, &metrics, factors, &ModelKind::ALL),
        Commands::Scale => {
            print_scale(&engine);
            Ok(())
        }
    };

    if cli.metrics {
        eprintln!("{}", metrics.encode_text()?);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_flags_resolve_to_factor_records() {
        let cli = Cli::try_parse_from([
            "invasive-risk", "assess", "--sf", "5", "--asr", "10", "--via", "2", "--ldd", "1",
            "--vrs", "Low", "--sgr", "Low", "--ha", "low", "--nmd", "VL", "--model", "ii",
        ])
        .unwrap();
        let Commands::Assess { factors, model } = cli.command else {
            panic!("expected assess");
        };
        assert_eq!(model, ModelKind::ModelII);
        let input = factors.resolve().unwrap();
        assert_eq!(input.dispersal.asr, 10.0);
        assert_eq!(input.linguistic.nmd, "VL");
    }

    #[test]
    fn missing_factor_is_reported_by_flag() {
        let cli = Cli::try_parse_from(["invasive-risk", "compare", "--sf", "5"]).unwrap();
        let Commands::Compare { factors } = cli.command else {
            panic!("expected compare");
        };
        let err = factors.resolve().unwrap_err();
        assert!(err.to_string().contains("--asr"));
    }

    #[test]
    fn unknown_model_is_a_parse_error() {
        let parsed = Cli::try_parse_from(["invasive-risk", "assess", "--model", "iii"]);
        assert!(parsed.is_err());
    }
}
