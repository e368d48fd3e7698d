//! # Catalog Bootstrap
//!
//! Builds the application state at startup. When `HX_SEED_FILE` names a
//! catalog (JSON or YAML), its hackathons are loaded into the store in
//! document order. Without a seed file the store starts empty.
//!
//! Seeded hackathons whose schedule fails validation are still loaded, with
//! a warning: status derivation is defined for any window ordering.

use hx_catalog::{load_catalog, CatalogError};
use hx_lifecycle::validate_schedule;

use crate::state::{AppConfig, AppState};

/// Errors during bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The seed catalog could not be read or parsed.
    #[error("seed catalog: {0}")]
    Seed(#[from] CatalogError),
}

/// Build the application state, seeding the store if configured.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let state = AppState::with_config(config);

    let Some(path) = state.config.seed_file.clone() else {
        tracing::info!(
            port = state.config.port,
            "no seed catalog configured; starting with an empty store"
        );
        return Ok(state);
    };

    let hackathons = load_catalog(&path)?;
    for hackathon in hackathons {
        if let Err(e) = validate_schedule(&hackathon.windows) {
            tracing::warn!(
                id = %hackathon.id,
                title = %hackathon.title,
                error = %e,
                "seeded hackathon has an inconsistent schedule"
            );
        }
        state.hackathons.insert(hackathon.id, hackathon);
    }

    tracing::info!(
        seed = %path.display(),
        count = state.hackathons.len(),
        submission_buffer_min = state.config.buffers.submission_starting.num_minutes(),
        judging_buffer_min = state.config.buffers.judging_starting.num_minutes(),
        "seed catalog loaded"
    );
    Ok(state)
}
