//! # Explore Subcommand
//!
//! The explore-page listing on the command line. Filters apply in the order
//! phase, status, tech, minimum prize; catalog order is kept.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hx_catalog::{evaluate, ExploreQuery, Phase, Snapshot};
use hx_lifecycle::LifecycleStatus;

/// Arguments for the `hx explore` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExploreArgs {
    /// Catalog file (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Exact lifecycle status, e.g. `live` or "Registration Open".
    #[arg(long)]
    pub status: Option<String>,

    /// Tech-stack substring, case-insensitive.
    #[arg(long)]
    pub tech: Option<String>,

    /// Minimum total prize, inclusive.
    #[arg(long, value_name = "AMOUNT")]
    pub min_prize: Option<f64>,

    /// Listing tab: live, past, or registration.
    #[arg(long)]
    pub phase: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ExploreArgs {
    fn query(&self) -> Result<ExploreQuery> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<LifecycleStatus>)
            .transpose()
            .context("invalid --status")?;
        let phase = self
            .phase
            .as_deref()
            .map(str::parse::<Phase>)
            .transpose()
            .context("invalid --phase")?;
        if let Some(min) = self.min_prize {
            if !min.is_finite() {
                bail!("invalid --min-prize: must be a finite number, got {min}");
            }
        }
        Ok(ExploreQuery {
            phase,
            status,
            tech: self.tech.clone(),
            min_prize: self.min_prize,
        })
    }
}

/// Execute the explore subcommand.
pub fn run_explore(args: &ExploreArgs, snapshot: Snapshot, out: &mut impl Write) -> Result<u8> {
    let query = args.query()?;
    let hackathons = crate::load(&args.file)?;
    let views = evaluate(query.apply(&hackathons, snapshot), snapshot);
    tracing::debug!(?query, shown = views.len(), "explore filters applied");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        return Ok(0);
    }

    for view in &views {
        writeln!(
            out,
            "{:<20}  {:>12.2}  {}  [{}]",
            view.status_label,
            view.total_prize,
            view.hackathon.title,
            view.hackathon.tech_stack.join(", ")
        )?;
    }
    writeln!(out, "{} of {} hackathon(s)", views.len(), hackathons.len())?;
    Ok(0)
}
