//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor: the hackathon store and the runtime
//! configuration (port, seed catalog, phase buffers).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use hx_catalog::{Hackathon, Snapshot};
use hx_core::{HackathonId, Timestamp};
use hx_lifecycle::PhaseBuffers;
use parking_lot::RwLock;
use thiserror::Error;

// -- Generic In-Memory Store --------------------------------------------------

#[derive(Debug)]
struct StoreInner<T> {
    order: Vec<HackathonId>,
    records: HashMap<HackathonId, T>,
}

/// Thread-safe, cloneable in-memory store that lists records in insertion
/// order.
///
/// The lock is `parking_lot` and is never held across `.await` points.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<StoreInner<T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreInner {
                order: Vec::new(),
                records: HashMap::new(),
            })),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    /// Replacing a record keeps its original position.
    pub fn insert(&self, id: HackathonId, value: T) -> Option<T> {
        let mut guard = self.data.write();
        let previous = guard.records.insert(id, value);
        if previous.is_none() {
            guard.order.push(id);
        }
        previous
    }

    /// Insert a record only if the key is not already present. Returns
    /// `false`, leaving the store unchanged, when it is. The check and the
    /// insert happen under one write lock.
    pub fn insert_if_absent(&self, id: HackathonId, value: T) -> bool {
        let mut guard = self.data.write();
        if guard.records.contains_key(&id) {
            return false;
        }
        guard.records.insert(id, value);
        guard.order.push(id);
        true
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &HackathonId) -> Option<T> {
        self.data.read().records.get(id).cloned()
    }

    /// List all records in insertion order.
    pub fn list(&self) -> Vec<T> {
        let guard = self.data.read();
        guard
            .order
            .iter()
            .filter_map(|id| guard.records.get(id).cloned())
            .collect()
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -- Configuration ------------------------------------------------------------

/// Environment variable names read by [`AppConfig::from_env`].
pub const ENV_PORT: &str = "PORT";
pub const ENV_SEED_FILE: &str = "HX_SEED_FILE";
pub const ENV_SUBMISSION_BUFFER: &str = "HX_SUBMISSION_BUFFER_MINUTES";
pub const ENV_JUDGING_BUFFER: &str = "HX_JUDGING_BUFFER_MINUTES";

const DEFAULT_BUFFER_MINUTES: u32 = 60;

/// A configuration variable held a value that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Catalog file loaded into the store at startup.
    pub seed_file: Option<PathBuf>,
    /// Starting-soon buffers used for every status derivation.
    pub buffers: PhaseBuffers,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            seed_file: None,
            buffers: PhaseBuffers::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = parse_var(ENV_PORT, get(ENV_PORT))?.unwrap_or(8080);
        let submission: Option<u32> = parse_var(ENV_SUBMISSION_BUFFER, get(ENV_SUBMISSION_BUFFER))?;
        let judging: Option<u32> = parse_var(ENV_JUDGING_BUFFER, get(ENV_JUDGING_BUFFER))?;
        let buffers = PhaseBuffers::from_minutes(
            submission.unwrap_or(DEFAULT_BUFFER_MINUTES),
            judging.unwrap_or(DEFAULT_BUFFER_MINUTES),
        );

        Ok(Self {
            port,
            seed_file: get(ENV_SEED_FILE).map(PathBuf::from),
            buffers,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim().parse::<T>().map_err(|_| ConfigError {
                name,
                value: v.clone(),
            })
        })
        .transpose()
}

// -- Application State --------------------------------------------------------

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Hackathons, in the order they were added.
    pub hackathons: Store<Hackathon>,
    /// Runtime configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Empty state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Empty state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            hackathons: Store::new(),
            config,
        }
    }

    /// Evaluation snapshot for one request.
    pub fn snapshot(&self, now: Timestamp) -> Snapshot {
        Snapshot::with_buffers(now, self.config.buffers)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
