//! Afstand CLI
//!
//! Measures road distance and travel time from a Dutch place or postcode to
//! a fixed set of destinations and ranks them by travel time.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod check;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use application::format_destinations;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, build_report_service, init_logging, new_session};

use crate::check::CheckArgs;

/// Afstand CLI
#[derive(Parser)]
#[command(name = "afstand")]
#[command(author, version, about = "Distance and travel time checker", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "AFSTAND_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the destinations by travel time from a place
    Check(CheckArgs),

    /// List the configured destinations
    Destinations,

    /// Print the effective configuration as TOML
    Config,
}

/// Log filter override from verbosity count; `None` leaves it to config
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Check(args) => run_check(&config, &args).await,

        Commands::Destinations => {
            println!("{}", format_destinations(&config.destinations));
            Ok(ExitCode::SUCCESS)
        },

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        },
    }
}

async fn run_check(config: &AppConfig, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let input = match args.query_input() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", application::ApplicationError::from(e).user_message());
            return Ok(ExitCode::FAILURE);
        },
    };
    let options = args.report_options(&config.report);

    let service = match build_report_service(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        },
    };
    let session = new_session(config);

    match service.compute(&session, &input, &options).await {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", application::format_report(&report, &options));
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            tracing::debug!(error = %e, "Report failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        },
    }
}
