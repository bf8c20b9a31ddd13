//! Read and bump the version marker of a single file name.

use crate::domain::AppError;
use crate::domain::versioning::VersionedName;

/// Version and successor of a strictly versioned file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    pub version: u32,
    pub next: String,
}

/// Version encoded in `name`.
pub fn version(name: &str) -> Result<u32, AppError> {
    Ok(VersionedName::parse(name)?.version())
}

/// Version of `name` and the name of its successor.
pub fn bump(name: &str) -> Result<VersionBump, AppError> {
    let parsed = VersionedName::parse(name)?;
    Ok(VersionBump { version: parsed.version(), next: parsed.next()? })
}
