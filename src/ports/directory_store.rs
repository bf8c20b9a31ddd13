//! Directory access used by the versioned file locator.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading directory listings and small text files.
///
/// Paths are used as given; implementations do not resolve them against any
/// workspace root.
pub trait DirectoryStore {
    /// Entry names of `dir`, in the order the underlying listing yields them.
    ///
    /// A missing directory is reported as `AppError::DirectoryNotFound`.
    fn entry_names(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Check whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Read a file as UTF-8 text, or `None` when it does not exist.
    fn read_optional_file(&self, path: &Path) -> Result<Option<String>, AppError>;
}
