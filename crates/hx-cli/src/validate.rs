//! # Validate Subcommand
//!
//! Checks every hackathon's schedule for window ordering. Reports each
//! failure and exits 1 if any hackathon fails.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hx_lifecycle::validate_schedule;

/// Arguments for the `hx validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every schedule is consistent, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let hackathons = crate::load(&args.file)?;

    let mut failed = 0usize;
    for hackathon in &hackathons {
        match validate_schedule(&hackathon.windows) {
            Ok(()) if hackathon.windows.is_unscheduled() => {
                writeln!(out, "  WARN: {} has no schedule", hackathon.title)?;
            }
            Ok(()) => {}
            Err(e) => {
                failed += 1;
                writeln!(out, "  FAIL: {}: {e}", hackathon.title)?;
            }
        }
    }

    writeln!(
        out,
        "Schedules: {}/{} passed",
        hackathons.len() - failed,
        hackathons.len()
    )?;

    Ok(if failed > 0 { 1 } else { 0 })
}
