//! Locate command: find a zone's layout directory by code.

use serde::Serialize;

use crate::domain::{AppError, dir_matches_code};
use crate::ports::ZoneDirectoryStore;

/// A zone directory and the files inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedZone {
    pub directory: String,
    /// Paths relative to the base directory: `"{directory}/{file}"`.
    pub files: Vec<String>,
}

/// Find the directory for `code`. `Ok(None)` when no directory matches.
///
/// With several matches the lexicographically first directory wins.
pub fn execute<S: ZoneDirectoryStore>(
    store: &S,
    code: &str,
) -> Result<Option<LocatedZone>, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::config_error("Zone code must not be empty"));
    }

    let matching = store.list_dirs()?.into_iter().filter(|dir| dir_matches_code(dir, code));
    let Some(directory) = matching.min() else {
        return Ok(None);
    };

    let mut files: Vec<String> = store
        .list_files(&directory)?
        .into_iter()
        .map(|file| format!("{}/{}", directory, file))
        .collect();
    files.sort();

    Ok(Some(LocatedZone { directory, files }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockZoneStore;

    #[test]
    fn finds_directory_and_relative_files() {
        let store = MockZoneStore::new();
        store.add_file("G1_1 The Riverbank", "b.png");
        store.add_file("G1_1 The Riverbank", "a.png");

        let located = execute(&store, "G1_1").unwrap().expect("zone should be found");
        assert_eq!(located.directory, "G1_1 The Riverbank");
        assert_eq!(located.files, ["G1_1 The Riverbank/a.png", "G1_1 The Riverbank/b.png"]);
    }

    #[test]
    fn shorter_code_does_not_match_longer_one() {
        let store = MockZoneStore::new();
        store.add_dir("G1_15 The Ziggurat Refuge");

        assert_eq!(execute(&store, "G1_1").unwrap(), None);
    }

    #[test]
    fn empty_directory_has_no_files() {
        let store = MockZoneStore::new();
        store.add_dir("G1_2 Clearfell");

        let located = execute(&store, "G1_2").unwrap().unwrap();
        assert!(located.files.is_empty());
    }

    #[test]
    fn first_match_wins() {
        let store = MockZoneStore::new();
        store.add_dir("G1_3 Mud Burrow (old)");
        store.add_dir("G1_3 Mud Burrow");

        assert_eq!(execute(&store, "G1_3").unwrap().unwrap().directory, "G1_3 Mud Burrow");
    }

    #[test]
    fn missing_base_is_an_error() {
        let store = MockZoneStore::new().without_base();
        assert!(matches!(execute(&store, "G1_1"), Err(AppError::BaseDirMissing(_))));
    }

    #[test]
    fn blank_code_is_rejected() {
        let store = MockZoneStore::new();
        assert!(matches!(execute(&store, "  "), Err(AppError::Configuration(_))));
    }
}
