//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together settings
//! resolution, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::app::config::{load_catalog, load_settings};
use crate::app::{
    AppContext,
    commands::{locate, scaffold},
};
use crate::services::FilesystemZoneStore;

pub use crate::app::commands::locate::LocatedZone;
pub use crate::domain::{AppError, Catalog, ScaffoldReport, SettingsOverrides};

/// Create one directory per zone of `catalog` directly under `base_path`.
///
/// Prints `Could not create {code} {name}` for every zone that failed and
/// returns the per-zone report. No failure aborts the pass.
pub fn ensure_zone_directories(catalog: &Catalog, base_path: &Path) -> ScaffoldReport {
    let ctx = AppContext::new(FilesystemZoneStore::new(base_path), catalog.clone());
    scaffold::execute_with(&ctx, |zone| println!("{}", zone.diagnostic()))
}

// =============================================================================
// Scaffold Command API
// =============================================================================

/// Scaffold zone directories using settings resolved from the current directory.
pub fn scaffold(overrides: &SettingsOverrides) -> Result<ScaffoldReport, AppError> {
    scaffold_at(overrides, std::env::current_dir()?)
}

/// Scaffold zone directories using settings resolved from `cwd`.
pub fn scaffold_at(
    overrides: &SettingsOverrides,
    cwd: impl AsRef<Path>,
) -> Result<ScaffoldReport, AppError> {
    let settings = load_settings(overrides, cwd.as_ref())?;
    let base_dir = settings.base_dir()?;
    let catalog = load_catalog(&settings)?;
    Ok(ensure_zone_directories(&catalog, &base_dir))
}

/// Directory paths a scaffold pass would try to create, without creating them.
pub fn scaffold_plan_at(
    overrides: &SettingsOverrides,
    cwd: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, AppError> {
    let settings = load_settings(overrides, cwd.as_ref())?;
    let base_dir = settings.base_dir()?;
    let catalog = load_catalog(&settings)?;
    Ok(scaffold::plan(&catalog).into_iter().map(|name| base_dir.join(name)).collect())
}

// =============================================================================
// List / Locate Command API
// =============================================================================

/// Load the catalog selected by the settings resolved from `cwd`.
pub fn catalog_at(
    overrides: &SettingsOverrides,
    cwd: impl AsRef<Path>,
) -> Result<Catalog, AppError> {
    let settings = load_settings(overrides, cwd.as_ref())?;
    load_catalog(&settings)
}

/// Find the layout directory for a zone code.
pub fn locate(overrides: &SettingsOverrides, code: &str) -> Result<Option<LocatedZone>, AppError> {
    locate_at(overrides, code, std::env::current_dir()?)
}

/// Find the layout directory for a zone code, resolving settings from `cwd`.
pub fn locate_at(
    overrides: &SettingsOverrides,
    code: &str,
    cwd: impl AsRef<Path>,
) -> Result<Option<LocatedZone>, AppError> {
    let settings = load_settings(overrides, cwd.as_ref())?;
    let store = FilesystemZoneStore::new(settings.base_dir()?);
    locate::execute(&store, code)
}
