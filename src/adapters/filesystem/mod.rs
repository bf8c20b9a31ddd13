//! Filesystem adapter for the `DirectoryStore` port.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::DirectoryStore;

/// `DirectoryStore` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemStore;

impl FilesystemStore {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryStore for FilesystemStore {
    fn entry_names(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let entries = fs::read_dir(dir).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::DirectoryNotFound(dir.display().to_string()),
            _ => AppError::from(err),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(entry = ?raw, dir = %dir.display(), "skipping non UTF-8 entry"),
            }
        }
        debug!(dir = %dir.display(), count = names.len(), "listed directory");
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn read_optional_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }
}
