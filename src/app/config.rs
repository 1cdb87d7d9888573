//! Settings and catalog loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{
    AppError, CONFIG_FILE, Catalog, CatalogFormat, CatalogSource, ConfigFile, Settings,
    SettingsOverrides,
};
use crate::services::embedded_catalog;

/// Resolve settings for an invocation running in `cwd`.
///
/// An explicit `--config` must exist; the implicit `zonedir.toml` is optional.
pub fn load_settings(overrides: &SettingsOverrides, cwd: &Path) -> Result<Settings, AppError> {
    let file = match &overrides.config {
        Some(path) => {
            let path = if path.is_absolute() { path.clone() } else { cwd.join(path) };
            let content = fs::read_to_string(&path).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::config_error(format!("Config file not found: {}", path.display()))
                } else {
                    err.into()
                }
            })?;
            read_config(&content, &path)?
        }
        None => {
            let path = cwd.join(CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(content) => read_config(&content, &path)?,
                Err(err) if err.kind() == io::ErrorKind::NotFound => ConfigFile::default(),
                Err(err) => return Err(err.into()),
            }
        }
    };

    Settings::resolve(overrides, file, cwd)
}

fn read_config(content: &str, path: &Path) -> Result<ConfigFile, AppError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    Ok(ConfigFile::parse_toml(content)?.anchored_at(dir))
}

/// Load the catalog named by the settings.
pub fn load_catalog(settings: &Settings) -> Result<Catalog, AppError> {
    match &settings.catalog {
        CatalogSource::Embedded => embedded_catalog(),
        CatalogSource::File(path) => {
            let format = CatalogFormat::from_path(path)?;
            let content = fs::read_to_string(path).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::config_error(format!("Catalog file not found: {}", path.display()))
                } else {
                    err.into()
                }
            })?;
            Catalog::parse(&content, format, &path.display().to_string())
        }
    }
}
