// ABOUTME: Barpath CLI - run lift diagnostics and query volume and accessory rule tables
// ABOUTME: Reads DiagnosticEngineInput JSON from a file or stdin and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Diagnose a bench session from a file
//! barpath diagnose --input session.json --pretty
//!
//! # Diagnose from stdin after validating the input
//! cat session.json | barpath diagnose --input - --validate
//!
//! # Weekly volume ceilings for an intermediate lifter
//! barpath volume --training-age intermediate
//!
//! # Home-gym accessories for a triceps-limited bench
//! barpath accessories --lift bench_press --limiter triceps_lockout_deficit --equipment home
//!
//! # List registered lifts
//! barpath lifts
//! ```

use anyhow::{Context, Result};
use barpath::logging::LoggingConfig;
use barpath::models::{DiagnosticEngineInput, Equipment};
use barpath::{DiagnosticEngine, LiftRegistry};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "barpath",
    version,
    about = "Deterministic lift diagnostics",
    long_about = "Estimate one-rep maxes, rank weakness hypotheses, and query the volume and accessory rule tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the diagnostic engine on one input document
    Diagnose {
        /// Input JSON file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Reject malformed snapshots before diagnosing
        #[arg(long)]
        validate: bool,
    },

    /// Print weekly volume ceilings for a training-age tier
    Volume {
        /// beginner, intermediate, advanced (anything else uses the default tier)
        #[arg(long, default_value = "unspecified")]
        training_age: String,
    },

    /// Print approved accessories for a lift
    Accessories {
        /// Lift id
        #[arg(long)]
        lift: String,

        /// Limiter (hypothesis) key; repeat for several
        #[arg(long = "limiter")]
        limiters: Vec<String>,

        /// Equipment tier: home, limited, commercial
        #[arg(long, default_value = "commercial")]
        equipment: String,
    },

    /// List registered lift ids
    Lifts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let registry = LiftRegistry::global();
    info!(
        lift_config_version = %registry.version,
        lifts = registry.lifts.len(),
        "Lift registry ready"
    );
    let engine = DiagnosticEngine::new(registry);

    match cli.command {
        Command::Diagnose {
            input,
            pretty,
            validate,
        } => {
            let document = read_input(&input)?;
            let request: DiagnosticEngineInput = serde_json::from_str(&document)
                .with_context(|| format!("Invalid diagnostic input in {}", input.display()))?;
            if validate {
                request.validate()?;
            }
            let signals = engine.run(&request)?;
            print_json(&signals, pretty)
        }
        Command::Volume { training_age } => {
            print_json(&barpath::volume_constraints_for_label(&training_age), true)
        }
        Command::Accessories {
            lift,
            limiters,
            equipment,
        } => {
            let equipment: Equipment = equipment.parse()?;
            print_json(
                &engine.approved_accessories(&lift, &limiters, equipment),
                true,
            )
        }
        Command::Lifts => {
            for lift_id in engine.known_lift_ids() {
                println!("{lift_id}");
            }
            Ok(())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut document = String::new();
        io::stdin()
            .read_to_string(&mut document)
            .context("Failed to read diagnostic input from stdin")?;
        return Ok(document);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
