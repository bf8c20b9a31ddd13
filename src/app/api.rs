//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the real filesystem.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemStore;
use crate::app::AppContext;
use crate::app::commands::{latest, list, skin_pack, version};
use crate::app::configuration::load_config;
use crate::domain::workspace_layout::normalize_path;

pub use crate::app::commands::latest::LatestOptions;
pub use crate::app::commands::list::ListOptions;
pub use crate::app::commands::skin_pack::{SkinPackOptions, SkinPackOutcome};
pub use crate::app::commands::version::VersionBump;
pub use crate::domain::{AppError, LatestFile, TieBreak, VpackConfig};

/// Create an `AppContext` rooted at `root`, loading `vpack.toml` when present.
fn create_context(root: impl Into<PathBuf>) -> Result<AppContext<FilesystemStore>, AppError> {
    let root = normalize_path(&root.into());
    let store = FilesystemStore::new();
    let config = load_config(&root, &store)?;
    Ok(AppContext::new(store, root, config))
}

/// Load the effective configuration for a workspace.
pub fn config_at(root: impl AsRef<Path>) -> Result<VpackConfig, AppError> {
    load_config(&normalize_path(root.as_ref()), &FilesystemStore::new())
}

/// List entries ending with an extension, relative to the current directory.
pub fn list(options: &ListOptions) -> Result<Vec<String>, AppError> {
    list_at(std::env::current_dir()?, options)
}

/// List entries ending with an extension, relative to the specified workspace.
pub fn list_at(root: impl Into<PathBuf>, options: &ListOptions) -> Result<Vec<String>, AppError> {
    let ctx = create_context(root)?;
    list::execute(&ctx, options)
}

/// Find the latest versioned file, relative to the current directory.
pub fn latest(options: &LatestOptions) -> Result<Option<LatestFile>, AppError> {
    latest_at(std::env::current_dir()?, options)
}

/// Find the latest versioned file, relative to the specified workspace.
pub fn latest_at(
    root: impl Into<PathBuf>,
    options: &LatestOptions,
) -> Result<Option<LatestFile>, AppError> {
    let ctx = create_context(root)?;
    latest::execute(&ctx, options)
}

/// Version number of a `<name>_vNNN.<ext>` file name or path.
pub fn version_of(name: &str) -> Result<u32, AppError> {
    version::version(name)
}

/// File name (or path) of the version after `name`.
pub fn next_version_name(name: &str) -> Result<String, AppError> {
    version::bump(name).map(|bump| bump.next)
}

/// Name the next skin pack of the workspace in the current directory.
pub fn skin_pack(options: SkinPackOptions) -> Result<SkinPackOutcome, AppError> {
    skin_pack_at(std::env::current_dir()?, options)
}

/// Name the next skin pack of the specified workspace.
pub fn skin_pack_at(
    root: impl Into<PathBuf>,
    options: SkinPackOptions,
) -> Result<SkinPackOutcome, AppError> {
    let ctx = create_context(root)?;
    skin_pack::execute(&ctx, options)
}
