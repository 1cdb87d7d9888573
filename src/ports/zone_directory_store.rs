//! Zone directory storage port.
//!
//! All names are single directory names relative to the store's base
//! directory. The store owns no catalog semantics.

use crate::domain::AppError;

/// Port for the directories that hold per-zone layout images.
pub trait ZoneDirectoryStore {
    /// Create one directory directly under the base directory.
    ///
    /// Must not create missing parents, must fail if the directory already
    /// exists, and must fail with `InvalidInput` when `name` is not a single
    /// path component.
    fn create_dir(&self, name: &str) -> Result<(), AppError>;

    /// Names of the directories under the base directory.
    ///
    /// Fails with [`AppError::BaseDirMissing`] when the base does not exist.
    fn list_dirs(&self) -> Result<Vec<String>, AppError>;

    /// Names of the regular files inside one zone directory.
    fn list_files(&self, dir: &str) -> Result<Vec<String>, AppError>;
}
