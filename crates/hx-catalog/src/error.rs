//! # Catalog Errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading catalogs or parsing query parameters.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON catalog did not match the expected shape.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML catalog did not match the expected shape.
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unrecognized listing phase.
    #[error("unknown phase {0:?}; expected live, past, or registration")]
    UnknownPhase(String),
}
