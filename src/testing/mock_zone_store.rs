use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, is_single_dir_name};
use crate::ports::ZoneDirectoryStore;

/// In-memory zone directory store for testing.
#[allow(dead_code)]
pub struct MockZoneStore {
    pub base: PathBuf,
    pub base_exists: bool,
    pub dirs: RefCell<BTreeSet<String>>,
    pub files: RefCell<BTreeMap<String, Vec<String>>>,
    pub failures: RefCell<HashMap<String, io::ErrorKind>>,
    pub create_calls: RefCell<Vec<String>>,
}

impl Default for MockZoneStore {
    fn default() -> Self {
        Self {
            base: PathBuf::from("layouts"),
            base_exists: true,
            dirs: RefCell::default(),
            files: RefCell::default(),
            failures: RefCell::default(),
            create_calls: RefCell::default(),
        }
    }
}

#[allow(dead_code)]
impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_base(mut self) -> Self {
        self.base_exists = false;
        self
    }

    pub fn add_dir(&self, name: &str) {
        self.dirs.borrow_mut().insert(name.to_string());
    }

    pub fn add_file(&self, dir: &str, file: &str) {
        self.add_dir(dir);
        self.files.borrow_mut().entry(dir.to_string()).or_default().push(file.to_string());
    }

    /// Make `create_dir(name)` fail with `kind`.
    pub fn fail_on(&self, name: &str, kind: io::ErrorKind) {
        self.failures.borrow_mut().insert(name.to_string(), kind);
    }

    pub fn dir_names(&self) -> Vec<String> {
        self.dirs.borrow().iter().cloned().collect()
    }
}

impl ZoneDirectoryStore for MockZoneStore {
    fn create_dir(&self, name: &str) -> Result<(), AppError> {
        self.create_calls.borrow_mut().push(name.to_string());

        if !is_single_dir_name(name) {
            return Err(io::Error::from(io::ErrorKind::InvalidInput).into());
        }
        if !self.base_exists {
            return Err(io::Error::from(io::ErrorKind::NotFound).into());
        }
        if let Some(kind) = self.failures.borrow().get(name) {
            return Err(io::Error::from(*kind).into());
        }
        if !self.dirs.borrow_mut().insert(name.to_string()) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists).into());
        }
        Ok(())
    }

    fn list_dirs(&self) -> Result<Vec<String>, AppError> {
        if !self.base_exists {
            return Err(AppError::BaseDirMissing(self.base.clone()));
        }
        Ok(self.dir_names())
    }

    fn list_files(&self, dir: &str) -> Result<Vec<String>, AppError> {
        let mut files = self.files.borrow().get(dir).cloned().unwrap_or_default();
        files.sort();
        Ok(files)
    }
}
