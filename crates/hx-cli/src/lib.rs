//! # hx-cli: CLI Tool for Hackathon Catalogs
//!
//! Provides the `hx` command-line interface over a catalog file (JSON or
//! YAML, chosen by extension).
//!
//! ## Subcommands
//!
//! - `hx status`: derived lifecycle status per hackathon.
//! - `hx explore`: explore-page filters (phase, status, tech, minimum prize).
//! - `hx prize`: prize totals per hackathon and overall.
//! - `hx validate`: schedule ordering checks.
//!
//! ```bash
//! hx --at 2026-01-16T00:00:00Z explore catalog.yaml --phase live --min-prize 10000
//! hx validate catalog.json
//! ```
//!
//! Every subcommand evaluates at one instant: `--at` when given, otherwise
//! the wall clock sampled once at startup.

pub mod explore;
pub mod prize;
pub mod status;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use hx_catalog::{load_catalog, Hackathon};
use hx_core::Timestamp;

/// Resolve the evaluation instant from the `--at` flag.
pub fn resolve_at(at: Option<&str>) -> Result<Timestamp> {
    match at {
        Some(text) => Timestamp::parse_lenient(text).context("invalid --at value"),
        None => Ok(Timestamp::now()),
    }
}

/// Load a catalog file, with the path in the error context.
pub fn load(path: &Path) -> Result<Vec<Hackathon>> {
    let hackathons =
        load_catalog(path).with_context(|| format!("failed to load catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), count = hackathons.len(), "catalog loaded");
    Ok(hackathons)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_at_explicit() {
        let at = resolve_at(Some("2026-01-16T12:00:00+02:00")).unwrap();
        assert_eq!(at.to_iso8601(), "2026-01-16T10:00:00.000Z");
    }

    #[test]
    fn resolve_at_rejects_garbage() {
        let err = resolve_at(Some("noon")).unwrap_err();
        assert!(format!("{err:#}").contains("--at"));
    }

    #[test]
    fn load_reports_path() {
        let err = load(Path::new("/nonexistent/hx.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/hx.json"));
    }

    #[test]
    fn load_reads_catalog() {
        let file = testing::catalog_file(testing::CATALOG);
        assert_eq!(load(file.path()).unwrap().len(), 3);
    }
}
