//! vitalwatch — evaluate patient vitals against a clinical rule set.
//!
//! Subcommands:
//! - `check`: evaluate patients from a JSON file (or ad-hoc `--vital`
//!   readings) and print the formatted alert report per patient
//! - `validate`: validate a rule-set YAML file and report errors/warnings

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;

use vitalwatch_core::{collect_readings, VitalReading, Vitals};
use vitalwatch_notify::{format_alerts, overall_recommendation};
use vitalwatch_rules::loader::load_rule_set;
use vitalwatch_rules::validation::validate_yaml;
use vitalwatch_rules::AlertEngine;

// ── CLI ─────────────────────────────────────────────────────────────

/// Clinical vital-sign alerting over declarative rule sets.
#[derive(Parser, Debug)]
#[command(name = "vitalwatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate patient vitals and print alert reports.
    Check {
        /// Path to a rule-set YAML file (built-in clinical defaults if omitted).
        #[arg(long, env = "VITALWATCH_RULESET")]
        ruleset: Option<String>,

        /// Path to a patients JSON file.
        #[arg(required_unless_present = "vital")]
        patients: Option<String>,

        /// Ad-hoc reading as `parameter=value`; repeatable.
        #[arg(long = "vital", value_parser = parse_reading)]
        vital: Vec<VitalReading>,
    },
    /// Validate a rule-set YAML file.
    Validate {
        /// Path to the rule-set YAML file.
        ruleset: String,
    },
}

// ── Patient input ───────────────────────────────────────────────────

/// One patient record in the input file.
#[derive(Debug, Deserialize)]
struct Patient {
    id: String,
    #[serde(default)]
    name: Option<String>,
    vitals: Vitals,
}

/// Top-level patients document.
#[derive(Debug, Deserialize)]
struct PatientsFile {
    patients: Vec<Patient>,
}

/// Parse a `parameter=value` flag into a reading.
fn parse_reading(s: &str) -> Result<VitalReading, String> {
    let (parameter, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected parameter=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value in '{s}': {e}"))?;
    Ok(VitalReading {
        parameter: parameter.trim().to_string(),
        value,
    })
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            ruleset,
            patients,
            vital,
        } => check(ruleset.as_deref(), patients.as_deref(), vital),
        Command::Validate { ruleset } => validate(&ruleset),
    }
}

fn build_engine(ruleset: Option<&str>) -> anyhow::Result<AlertEngine> {
    match ruleset {
        Some(path) => {
            let config = load_rule_set(path)
                .with_context(|| format!("failed to load rule set '{path}'"))?;
            AlertEngine::from_config(&config).context("failed to build alert engine")
        }
        None => Ok(AlertEngine::new()),
    }
}

// ── check ───────────────────────────────────────────────────────────

fn check(
    ruleset: Option<&str>,
    patients_path: Option<&str>,
    readings: Vec<VitalReading>,
) -> anyhow::Result<()> {
    let engine = build_engine(ruleset)?;

    if !readings.is_empty() {
        let vitals = collect_readings(readings);
        print_report(&engine, "ad-hoc readings", &vitals);
        return Ok(());
    }

    // clap's `required_unless_present` guarantees one of the two is given.
    let Some(path) = patients_path else {
        anyhow::bail!("either a patients file or --vital readings are required");
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read patients file '{path}'"))?;
    let file: PatientsFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse patients file '{path}'"))?;
    info!(patients = file.patients.len(), "evaluating patients");

    for patient in &file.patients {
        let label = match &patient.name {
            Some(name) => format!("{name} ({})", patient.id),
            None => patient.id.clone(),
        };
        print_report(&engine, &label, &patient.vitals);
    }
    Ok(())
}

fn print_report(engine: &AlertEngine, label: &str, vitals: &Vitals) {
    let alerts = engine.evaluate(vitals);
    println!("=== {label} ===");
    println!("{}", format_alerts(&alerts));
    println!("{}", overall_recommendation(&alerts).summary());
    println!();
}

// ── validate ────────────────────────────────────────────────────────

fn validate(path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rule set '{path}'"))?;
    let result = validate_yaml(&raw);

    for err in &result.errors {
        let location = if err.path.is_empty() { path } else { &err.path };
        match &err.suggestion {
            Some(s) => println!("error: {location}: {} ({s})", err.message),
            None => println!("error: {location}: {}", err.message),
        }
    }
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }

    if result.valid {
        println!("{path}: OK");
        Ok(())
    } else {
        anyhow::bail!("{} validation error(s) in '{path}'", result.errors.len())
    }
}
