//! Strict `<base>_vNNN.<ext>` file names.

use crate::domain::AppError;

use super::marker::{MAX_VERSION, VersionMarker, format_version};

/// A file name (or path) whose last component carries a strict version marker.
///
/// The marker is the rightmost `_vNNN` that is immediately followed by a `.`.
/// Directory components are never inspected, so a `_v001.` inside a parent
/// folder name cannot be mistaken for the file's version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedName<'a> {
    raw: &'a str,
    marker: VersionMarker,
}

impl<'a> VersionedName<'a> {
    /// Parse a file name or path, failing with `AppError::Format` when the
    /// naming convention is not met.
    ///
    /// The final component is found with the platform's separator rules
    /// (`std::path::is_separator`): `\` splits components on Windows but is an
    /// ordinary name character elsewhere, so `rig_v004.d\pack.ext` fails on
    /// Windows and reads as version 4 on Unix.
    pub fn parse(raw: &'a str) -> Result<Self, AppError> {
        let offset = raw.rfind(std::path::is_separator).map(|idx| idx + 1).unwrap_or(0);
        let marker = VersionMarker::find_strict(&raw[offset..])
            .ok_or_else(|| AppError::Format(raw.to_string()))?;
        Ok(Self { raw, marker: marker.shifted(offset) })
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn version(&self) -> u32 {
        self.marker.value()
    }

    /// Text before the marker, e.g. `pack` for `pack_v003.ext`.
    pub fn base(&self) -> &'a str {
        &self.raw[..self.marker.span().start]
    }

    /// Text after the marker digits, e.g. `.ext` for `pack_v003.ext`.
    pub fn suffix(&self) -> &'a str {
        &self.raw[self.marker.span().end..]
    }

    /// Same name with the marker digits replaced by `version`.
    pub fn with_version(&self, version: u32) -> Result<String, AppError> {
        if version > MAX_VERSION {
            return Err(AppError::VersionOverflow {
                name: self.raw.to_string(),
                version: self.version(),
            });
        }
        let digits = self.marker.digits();
        let mut renamed = String::with_capacity(self.raw.len());
        renamed.push_str(&self.raw[..digits.start]);
        renamed.push_str(&format_version(version));
        renamed.push_str(&self.raw[digits.end..]);
        Ok(renamed)
    }

    /// Name of the following version.
    pub fn next(&self) -> Result<String, AppError> {
        self.with_version(self.version() + 1)
    }
}

/// Version encoded in `name`.
pub fn version_of(name: &str) -> Result<u32, AppError> {
    VersionedName::parse(name).map(|parsed| parsed.version())
}

/// Name of the version after `name`, replacing only the marker digits.
pub fn next_version_name(name: &str) -> Result<String, AppError> {
    VersionedName::parse(name)?.next()
}

/// Name of the first version of a new series, e.g. `skinPack_v001.gSkinPack`.
pub fn first_version_name(base: &str, extension: &str) -> String {
    format!("{}_v{}{}", base, format_version(1), extension)
}
