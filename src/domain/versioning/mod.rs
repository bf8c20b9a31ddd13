//! Version marker parsing and candidate ranking.

mod latest;
mod marker;
mod name;

pub use latest::{LatestFile, TieBreak, select_latest};
pub use marker::{MAX_VERSION, VersionMarker, format_version};
pub use name::{VersionedName, first_version_name, next_version_name, version_of};
