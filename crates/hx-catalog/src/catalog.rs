//! # Catalog Documents
//!
//! A catalog is a JSON or YAML document holding hackathon inputs, either as
//! a bare array or wrapped as `{ "hackathons": [...] }`. Used by the CLI and
//! by API bootstrap seeding.

use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::hackathon::{Hackathon, HackathonInput};

/// Catalog serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// `.yaml` / `.yml` are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<HackathonInput>),
    Wrapped { hackathons: Vec<HackathonInput> },
}

impl CatalogDocument {
    fn into_inputs(self) -> Vec<HackathonInput> {
        match self {
            Self::List(inputs) | Self::Wrapped { hackathons: inputs } => inputs,
        }
    }
}

/// Parse catalog text into normalized hackathons, keeping document order.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Vec<Hackathon>, CatalogError> {
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(document
        .into_inputs()
        .into_iter()
        .map(Hackathon::from_input)
        .collect())
}

/// Read and parse a catalog file, choosing the format from its extension.
pub fn load_catalog(path: &Path) -> Result<Vec<Hackathon>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let hackathons = parse_catalog(&text, CatalogFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), count = hackathons.len(), "catalog loaded");
    Ok(hackathons)
}
