//! Act/zone catalog.
//!
//! The catalog is loaded once and treated as read-only input. Its serialized
//! shape is `{ acts: [ { name, zones: [ { code, name } ] } ] }` in any of the
//! supported formats.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A coded, named sub-area of an act. Maps to exactly one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub code: String,
    pub name: String,
}

impl Zone {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }

    /// Directory name for this zone: `"{code} {name}"`.
    pub fn dir_name(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// Top-level grouping of zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    pub name: String,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Act {
    pub fn new(name: impl Into<String>, zones: Vec<Zone>) -> Self {
        Self { name: name.into(), zones }
    }
}

/// Ordered sequence of acts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    acts: Vec<Act>,
}

impl Catalog {
    pub fn new(acts: Vec<Act>) -> Self {
        Self { acts }
    }

    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    /// Every zone paired with its act, in traversal order.
    pub fn zones(&self) -> impl Iterator<Item = (&Act, &Zone)> {
        self.acts.iter().flat_map(|act| act.zones.iter().map(move |zone| (act, zone)))
    }

    pub fn zone_count(&self) -> usize {
        self.acts.iter().map(|act| act.zones.len()).sum()
    }

    pub fn find(&self, code: &str) -> Option<&Zone> {
        self.zones().map(|(_, zone)| zone).find(|zone| zone.code == code)
    }

    /// Parse catalog content. `origin` names the source in error messages.
    pub fn parse(content: &str, format: CatalogFormat, origin: &str) -> Result<Self, AppError> {
        match format {
            CatalogFormat::Json => {
                serde_json::from_str(content).map_err(|e| AppError::catalog_parse(origin, e))
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| AppError::catalog_parse(origin, e))
            }
            CatalogFormat::Toml => {
                toml::from_str(content).map_err(|e| AppError::catalog_parse(origin, e))
            }
        }
    }
}

/// On-disk catalog encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yml" | "yaml" => Ok(CatalogFormat::Yaml),
            "toml" => Ok(CatalogFormat::Toml),
            _ => Err(AppError::UnsupportedCatalogFormat(path.display().to_string())),
        }
    }
}

/// Whether a directory name belongs to the zone with `code`.
///
/// The name must be the code itself or the code followed by a space, so
/// `G1_1` never matches `G1_15 ...`.
pub fn dir_matches_code(dir_name: &str, code: &str) -> bool {
    match dir_name.strip_prefix(code) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}
