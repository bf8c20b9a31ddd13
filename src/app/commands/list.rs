//! List entries of a directory by extension.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::DirectoryStore;

/// Options for the list command.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Directory to scan; relative paths resolve against the workspace root.
    pub dir: PathBuf,
    /// Literal, case-sensitive name suffix such as `.gSkinPack`.
    pub extension: String,
}

/// Execute the list command.
pub fn execute<S: DirectoryStore>(
    ctx: &AppContext<S>,
    options: &ListOptions,
) -> Result<Vec<String>, AppError> {
    let dir = ctx.workspace_root().join(&options.dir);
    ctx.locator().list_by_extension(&dir, &options.extension)
}
