use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, is_single_dir_name};
use crate::ports::ZoneDirectoryStore;

/// Filesystem-based zone directory store.
#[derive(Debug, Clone)]
pub struct FilesystemZoneStore {
    base: PathBuf,
}

impl FilesystemZoneStore {
    /// Create a store rooted at the given base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn entries(&self, dir: &Path, want_dirs: bool) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            if is_dir != want_dirs {
                continue;
            }
            // Non UTF-8 names cannot belong to a catalog zone.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ZoneDirectoryStore for FilesystemZoneStore {
    fn create_dir(&self, name: &str) -> Result<(), AppError> {
        if !is_single_dir_name(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a single directory name", name),
            )
            .into());
        }
        fs::create_dir(self.base.join(name))?;
        Ok(())
    }

    fn list_dirs(&self) -> Result<Vec<String>, AppError> {
        self.entries(&self.base, true).map_err(|err| match err {
            AppError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                AppError::BaseDirMissing(self.base.clone())
            }
            other => other,
        })
    }

    fn list_files(&self, dir: &str) -> Result<Vec<String>, AppError> {
        self.entries(&self.base.join(dir), false)
    }
}
