//! Latest `_vNNN` file discovery over a `DirectoryStore`.

use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::domain::versioning::{self, LatestFile, TieBreak};
use crate::ports::DirectoryStore;

/// Finds versioned files in a directory and names their successors.
pub struct VersionedFileLocator<'a, S: DirectoryStore> {
    store: &'a S,
    tie_break: TieBreak,
}

impl<'a, S: DirectoryStore> VersionedFileLocator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store, tie_break: TieBreak::default() }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Entries of `dir` whose name ends with `extension`, in listing order.
    pub fn list_by_extension(&self, dir: &Path, extension: &str) -> Result<Vec<String>, AppError> {
        let mut names = self.store.entry_names(dir)?;
        names.retain(|name| name.ends_with(extension));
        Ok(names)
    }

    /// Highest-versioned entry of `dir` ending with `extension`.
    ///
    /// Returns `Ok(None)` when no candidate carries a `_vNNN` marker.
    pub fn find_latest(&self, dir: &Path, extension: &str) -> Result<Option<LatestFile>, AppError> {
        let candidates = self.list_by_extension(dir, extension)?;
        let latest = versioning::select_latest(
            candidates.iter().map(String::as_str),
            extension,
            self.tie_break,
        );

        match latest {
            Some((name, version)) => {
                debug!(
                    dir = %dir.display(),
                    name,
                    version,
                    tie_break = self.tie_break.label(),
                    "found latest versioned file"
                );
                Ok(Some(LatestFile::in_directory(dir, name.to_string(), version)))
            }
            None => {
                debug!(
                    dir = %dir.display(),
                    extension,
                    candidates = candidates.len(),
                    "no versioned candidates"
                );
                Ok(None)
            }
        }
    }

    /// Version encoded in `name`; fails with `AppError::Format` when malformed.
    pub fn version_of(&self, name: &str) -> Result<u32, AppError> {
        versioning::version_of(name)
    }

    /// Successor of `name`; fails with `AppError::Format` when malformed.
    pub fn next_version_name(&self, name: &str) -> Result<String, AppError> {
        versioning::next_version_name(name)
    }
}
