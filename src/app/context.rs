use std::path::{Path, PathBuf};

use crate::app::services::VersionedFileLocator;
use crate::domain::workspace_layout::normalize_path;
use crate::domain::{VpackConfig, WorkspaceLayout};
use crate::ports::DirectoryStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DirectoryStore> {
    store: S,
    workspace_root: PathBuf,
    config: VpackConfig,
}

impl<S: DirectoryStore> AppContext<S> {
    /// Create a new application context.
    ///
    /// The workspace root is normalized lexically, so `./sub/..` works even
    /// when `sub` does not exist.
    pub fn new(store: S, workspace_root: impl Into<PathBuf>, config: VpackConfig) -> Self {
        let workspace_root = normalize_path(&workspace_root.into());
        Self { store, workspace_root, config }
    }

    /// Get a reference to the directory store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &VpackConfig {
        &self.config
    }

    /// Folder layout derived from the workspace root and configuration.
    pub fn layout(&self) -> WorkspaceLayout {
        WorkspaceLayout::new(&self.workspace_root, &self.config.workspace)
    }

    /// Locator using the configured tie-break.
    pub fn locator(&self) -> VersionedFileLocator<'_, S> {
        VersionedFileLocator::new(&self.store).with_tie_break(self.config.locator.tie_break)
    }
}
