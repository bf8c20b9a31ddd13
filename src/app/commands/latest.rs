//! Find the latest versioned file in a directory.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, LatestFile, TieBreak};
use crate::ports::DirectoryStore;

/// Options for the latest command.
#[derive(Debug, Clone, Default)]
pub struct LatestOptions {
    /// Directory to scan; relative paths resolve against the workspace root.
    pub dir: PathBuf,
    /// Extension filter; the configured extension when `None`.
    pub extension: Option<String>,
    /// Tie-break override; the configured tie-break when `None`.
    pub tie_break: Option<TieBreak>,
}

/// Execute the latest command.
pub fn execute<S: DirectoryStore>(
    ctx: &AppContext<S>,
    options: &LatestOptions,
) -> Result<Option<LatestFile>, AppError> {
    let dir = ctx.workspace_root().join(&options.dir);
    let extension = options.extension.as_deref().unwrap_or(&ctx.config().locator.extension);

    let mut locator = ctx.locator();
    if let Some(tie_break) = options.tie_break {
        locator = locator.with_tie_break(tie_break);
    }
    locator.find_latest(&dir, extension)
}
