//! Sargam (sargam-cli) - Console entry point
//!
//! Asks for a scale in Hindustani notation and a base pitch, then prints the
//! scale in Western notation followed by every instrument pitch ranked by how
//! well it suits the scale.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sargam_core::{analyze, notation, report::Report};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for sargam
#[derive(Parser, Debug)]
#[command(name = "sargam")]
#[command(about = "Find the best instrument pitch for a Hindustani scale")]
#[command(version)]
struct Args {
    /// Scale notes separated by spaces (keys: S, r, R, g, G, m, M, P, d, D, n, N)
    #[arg(short, long, env = "SARGAM_SCALE")]
    scale: Option<String>,

    /// Base pitch in Western notation (e.g. C, D#, A)
    #[arg(short, long, env = "SARGAM_BASE_PITCH")]
    base_pitch: Option<String>,

    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Only show the N best candidates
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    top: Option<u8>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", env = "SARGAM_LOG")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("run failed: {:?}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    notation::validate_tables()
        .map_err(anyhow::Error::msg)
        .context("Notation tables are inconsistent")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let scale = match args.scale {
        Some(scale) => scale,
        None => prompt(
            &mut input,
            "\nInput the notes of the scale in Hindustani classical style (keys: S, r, R, g, G, m, M, P, d, D, n, N).\nEnter the notes separated by spaces: ",
        )?,
    };
    let base_pitch = match args.base_pitch {
        Some(base_pitch) => base_pitch,
        None => prompt(
            &mut input,
            "\nEnter the base pitch in Western notation (e.g., C, D#, A): ",
        )?,
    };

    info!("Analyzing scale '{}' at base pitch '{}'", scale.trim(), base_pitch.trim());
    let analysis = analyze(&scale, &base_pitch)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        writeln!(stdout, "{json}")?;
    } else {
        let limit = args.top.map_or(analysis.candidates.len(), usize::from);
        writeln!(stdout)?;
        writeln!(stdout, "{}", Report::new(&analysis).with_limit(limit))?;
    }
    Ok(())
}

/// Prints `message` and reads one line of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    anyhow::ensure!(read > 0, "No input given");
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
