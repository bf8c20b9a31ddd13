//! JSON output helpers for `--json` flags.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AppError, LatestFile};

/// Write `output` to stdout as compact single-line JSON.
pub fn write_json<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = serde_json::to_string(output)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// JSON shape of `vpack latest --json`.
#[derive(Debug, Serialize)]
pub struct LatestOutput<'a> {
    pub name: &'a str,
    pub path: PathBuf,
    pub version: u32,
}

impl<'a> From<&'a LatestFile> for LatestOutput<'a> {
    fn from(latest: &'a LatestFile) -> Self {
        Self { name: &latest.name, path: latest.full_path(), version: latest.version }
    }
}
