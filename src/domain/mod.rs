pub mod configuration;
pub mod error;
pub mod versioning;
pub mod workspace_layout;

pub use configuration::{LocatorSettings, VpackConfig, WorkspaceSettings};
pub use error::AppError;
pub use versioning::{LatestFile, TieBreak, VersionedName};
pub use workspace_layout::WorkspaceLayout;
