use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for zonedir operations.
///
/// Per-zone creation failures are not represented here; they are recorded as
/// [`ZoneOutcome::Failed`](crate::domain::ZoneOutcome) and never abort a pass.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Base directory for zone directories does not exist.
    #[error("Base directory not found: {}", .0.display())]
    BaseDirMissing(PathBuf),

    /// Catalog file extension is not one of json, yml, yaml, toml.
    #[error("Unsupported catalog format '{0}': expected .json, .yml, .yaml or .toml")]
    UnsupportedCatalogFormat(String),

    /// Catalog content could not be deserialized.
    #[error("Failed to parse catalog {origin}: {details}")]
    CatalogParse { origin: String, details: String },

    /// Config file could not be deserialized.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn catalog_parse(origin: &str, details: impl ToString) -> Self {
        AppError::CatalogParse { origin: origin.to_string(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind` view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::BaseDirMissing(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_) | AppError::UnsupportedCatalogFormat(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::CatalogParse { .. } | AppError::ConfigParse(_) => io::ErrorKind::InvalidData,
        }
    }
}
