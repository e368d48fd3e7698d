//! # Prize Subcommand
//!
//! Prize totals per hackathon and for the whole catalog. A hackathon's total
//! is the sum of its cohort amounts; winner counts are not multiplied in.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Arguments for the `hx prize` subcommand.
#[derive(Args, Debug)]
pub struct PrizeArgs {
    /// Catalog file (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the prize subcommand.
pub fn run_prize(args: &PrizeArgs, out: &mut impl Write) -> Result<u8> {
    let hackathons = crate::load(&args.file)?;

    let mut grand_total = 0.0;
    for hackathon in &hackathons {
        let total = hackathon.total_prize();
        grand_total += total;
        writeln!(
            out,
            "{total:>14.2}  {} ({} cohort(s))",
            hackathon.title,
            hackathon.prize_cohorts.len()
        )?;
    }
    writeln!(out, "{grand_total:>14.2}  TOTAL")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{catalog_file, output, CATALOG};

    #[test]
    fn prize_totals() {
        let file = catalog_file(CATALOG);
        let mut buf = Vec::new();
        let code = run_prize(&PrizeArgs { file: file.path().to_path_buf() }, &mut buf).unwrap();
        assert_eq!(code, 0);
        let out = output(buf);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim_start(), "15000.00  Rust Week (2 cohort(s))");
        assert_eq!(lines[1].trim_start(), "2500.00  Web Jam (1 cohort(s))");
        assert_eq!(lines[2].trim_start(), "0.00  Someday (0 cohort(s))");
        assert_eq!(lines[3].trim_start(), "17500.00  TOTAL");
    }
}
