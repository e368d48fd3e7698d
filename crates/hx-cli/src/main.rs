//! # hx CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hx_catalog::Snapshot;
use hx_cli::explore::{run_explore, ExploreArgs};
use hx_cli::prize::{run_prize, PrizeArgs};
use hx_cli::status::{run_status, StatusArgs};
use hx_cli::validate::{run_validate, ValidateArgs};
use hx_lifecycle::PhaseBuffers;

/// Hackathon catalog tool.
///
/// Derives lifecycle status, filters listings, totals prizes, and validates
/// schedules for a JSON or YAML catalog file.
#[derive(Parser, Debug)]
#[command(name = "hx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Evaluate at this RFC 3339 instant instead of now.
    #[arg(long, global = true, value_name = "RFC3339")]
    at: Option<String>,

    /// Minutes before hacking starts reported as Submission Starting.
    #[arg(long, global = true, default_value_t = 60)]
    submission_buffer: u32,

    /// Minutes before voting starts reported as Judging Starting.
    #[arg(long, global = true, default_value_t = 60)]
    judging_buffer: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the lifecycle status of each hackathon.
    Status(StatusArgs),

    /// List hackathons matching explore filters.
    Explore(ExploreArgs),

    /// Print prize totals.
    Prize(PrizeArgs),

    /// Check schedule ordering; exits 1 on any failure.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let at = match hx_cli::resolve_at(cli.at.as_deref()) {
        Ok(at) => at,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let buffers = PhaseBuffers::from_minutes(cli.submission_buffer, cli.judging_buffer);
    let snapshot = Snapshot::with_buffers(at, buffers);
    tracing::debug!(%at, "evaluation instant");

    let mut out = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Status(args) => run_status(&args, snapshot, &mut out),
        Commands::Explore(args) => run_explore(&args, snapshot, &mut out),
        Commands::Prize(args) => run_prize(&args, &mut out),
        Commands::Validate(args) => run_validate(&args, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
