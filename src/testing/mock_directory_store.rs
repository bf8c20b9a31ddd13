//! Test double for `DirectoryStore`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DirectoryStore;

/// In-memory `DirectoryStore` whose listings keep insertion order.
#[derive(Debug, Default)]
pub struct MockDirectoryStore {
    dirs: RefCell<HashMap<PathBuf, Vec<String>>>,
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MockDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with the given entries, in listing order.
    pub fn with_dir(self, dir: impl Into<PathBuf>, entries: &[&str]) -> Self {
        self.dirs
            .borrow_mut()
            .insert(dir.into(), entries.iter().map(|entry| entry.to_string()).collect());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }
}

impl DirectoryStore for MockDirectoryStore {
    fn entry_names(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        self.dirs
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| AppError::DirectoryNotFound(dir.display().to_string()))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|ancestor| !ancestor.as_os_str().is_empty()) {
            dirs.entry(ancestor.to_path_buf()).or_default();
            let (Some(parent), Some(name)) = (ancestor.parent(), ancestor.file_name()) else {
                continue;
            };
            if parent.as_os_str().is_empty() {
                continue;
            }
            let name = name.to_string_lossy().into_owned();
            let siblings = dirs.entry(parent.to_path_buf()).or_default();
            if !siblings.contains(&name) {
                siblings.push(name);
            }
        }
        Ok(())
    }

    fn read_optional_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.files.borrow().get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_lists_new_folders_in_their_parents() {
        let store = MockDirectoryStore::new().with_dir("/show/data", &["rig_v001.json"]);
        store.create_dir_all(Path::new("/show/data/skinPacks")).unwrap();

        assert_eq!(
            store.entry_names(Path::new("/show/data")).unwrap(),
            vec!["rig_v001.json", "skinPacks"]
        );
        assert!(store.entry_names(Path::new("/show/data/skinPacks")).unwrap().is_empty());
        assert_eq!(store.entry_names(Path::new("/show")).unwrap(), vec!["data"]);
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let store = MockDirectoryStore::new();
        store.create_dir_all(Path::new("/show/data")).unwrap();
        store.create_dir_all(Path::new("/show/data")).unwrap();

        assert_eq!(store.entry_names(Path::new("/show")).unwrap(), vec!["data"]);
    }
}
