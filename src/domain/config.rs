//! Configuration model: `zonedir.toml` plus command-line overrides.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "zonedir.toml";

/// Contents of a `zonedir.toml` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_path: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub profile: Option<String>,
}

impl ConfigFile {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Make relative paths relative to `dir` (the config file's directory).
    pub fn anchored_at(self, dir: &Path) -> Self {
        Self {
            base_path: self.base_path.map(|p| anchor(dir, p)),
            catalog: self.catalog.map(|p| anchor(dir, p)),
            profile: self.profile,
        }
    }
}

/// Values given on the command line. These win over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_path: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub profile: Option<String>,
    pub config: Option<PathBuf>,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_path: Option<PathBuf>,
    pub profile: Option<String>,
    pub catalog: CatalogSource,
}

impl Settings {
    /// Merge overrides over an (already anchored) config file.
    ///
    /// Relative override paths are taken relative to `cwd`.
    pub fn resolve(
        overrides: &SettingsOverrides,
        file: ConfigFile,
        cwd: &Path,
    ) -> Result<Self, AppError> {
        let base_path = overrides.base_path.clone().map(|p| anchor(cwd, p)).or(file.base_path);
        let catalog = match overrides.catalog.clone().map(|p| anchor(cwd, p)).or(file.catalog) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Embedded,
        };
        let profile = overrides.profile.clone().or(file.profile);
        if let Some(profile) = &profile {
            validate_profile(profile)?;
        }

        Ok(Self { base_path, profile, catalog })
    }

    /// Directory the zone directories live in: `base_path[/profile]`.
    pub fn base_dir(&self) -> Result<PathBuf, AppError> {
        let base = self.base_path.as_ref().ok_or_else(|| {
            AppError::config_error(format!(
                "No base path configured. Pass --base or set base_path in {}",
                CONFIG_FILE
            ))
        })?;

        Ok(match &self.profile {
            Some(profile) => base.join(profile),
            None => base.clone(),
        })
    }
}

fn anchor(dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { dir.join(path) }
}

/// Whether `name` is exactly one plain path component (no separators, `.` or `..`).
pub fn is_single_dir_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    let single_normal = matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none();

    !name.is_empty() && single_normal && !name.contains(['/', '\\'])
}

fn validate_profile(profile: &str) -> Result<(), AppError> {
    if !is_single_dir_name(profile) {
        return Err(AppError::config_error(format!(
            "Invalid profile '{}': must be a single directory name",
            profile
        )));
    }
    Ok(())
}
