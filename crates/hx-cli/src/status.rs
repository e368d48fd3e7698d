//! # Status Subcommand
//!
//! Prints the derived lifecycle status of each hackathon in a catalog, one
//! line per hackathon: id, status label, title.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use hx_catalog::Snapshot;
use hx_core::HackathonId;
use uuid::Uuid;

/// Arguments for the `hx status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Catalog file (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only report the hackathon with this id.
    #[arg(long)]
    pub id: Option<Uuid>,
}

/// Execute the status subcommand.
pub fn run_status(args: &StatusArgs, snapshot: Snapshot, out: &mut impl Write) -> Result<u8> {
    let hackathons = crate::load(&args.file)?;

    let selected: Vec<_> = match args.id.map(HackathonId::from) {
        Some(id) => {
            let found: Vec<_> = hackathons.iter().filter(|h| h.id == id).collect();
            if found.is_empty() {
                bail!("no hackathon with id {id} in {}", args.file.display());
            }
            found
        }
        None => hackathons.iter().collect(),
    };

    for hackathon in selected {
        let status = snapshot.status_of(hackathon);
        writeln!(out, "{}  {:<20}  {}", hackathon.id, status.label(), hackathon.title)?;
    }
    Ok(0)
}
