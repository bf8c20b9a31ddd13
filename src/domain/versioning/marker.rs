//! `_vNNN` version marker scanning.

use std::ops::Range;

/// Literal text that opens a version marker.
pub const MARKER_PREFIX: &str = "_v";

/// Number of digits in a well-formed version marker.
pub const VERSION_WIDTH: usize = 3;

/// Highest version representable by a well-formed marker.
pub const MAX_VERSION: u32 = 999;

/// A `_v` followed by a run of at least three digits inside a file name.
///
/// The digit run is read in full, so `_v1000` carries version 1000. Only
/// markers with exactly three digits count as well-formed (see `find_strict`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMarker {
    start: usize,
    digit_count: usize,
    value: u32,
}

impl VersionMarker {
    /// Numeric version encoded by the marker digits.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Byte range of the whole marker, `_v` included.
    pub fn span(&self) -> Range<usize> {
        self.start..self.digits().end
    }

    /// Byte range of the digit run.
    pub fn digits(&self) -> Range<usize> {
        let first = self.start + MARKER_PREFIX.len();
        first..first + self.digit_count
    }

    /// Every marker in `text`, left to right.
    pub fn scan(text: &str) -> impl Iterator<Item = VersionMarker> + '_ {
        let bytes = text.as_bytes();
        (0..bytes.len()).filter_map(move |idx| marker_at(bytes, idx))
    }

    /// Rightmost marker anywhere in `text`.
    ///
    /// This is the lenient form used when ranking candidates: the marker may be
    /// followed by anything and may hold more than three digits.
    pub fn find_loose(text: &str) -> Option<VersionMarker> {
        Self::scan(text).last()
    }

    /// Rightmost three-digit marker that is immediately followed by a `.`.
    pub fn find_strict(text: &str) -> Option<VersionMarker> {
        let bytes = text.as_bytes();
        Self::scan(text)
            .filter(|marker| {
                marker.digit_count == VERSION_WIDTH && bytes.get(marker.span().end) == Some(&b'.')
            })
            .last()
    }

    pub(crate) fn shifted(self, offset: usize) -> VersionMarker {
        VersionMarker { start: self.start + offset, ..self }
    }
}

fn marker_at(bytes: &[u8], idx: usize) -> Option<VersionMarker> {
    let rest = bytes.get(idx..)?.strip_prefix(MARKER_PREFIX.as_bytes())?;
    let digit_count = rest.iter().take_while(|byte| byte.is_ascii_digit()).count();
    if digit_count < VERSION_WIDTH {
        return None;
    }
    // Runs too long for a u32 are not treated as versions.
    let value = rest[..digit_count]
        .iter()
        .try_fold(0u32, |acc, digit| acc.checked_mul(10)?.checked_add(u32::from(digit - b'0')))?;
    Some(VersionMarker { start: idx, digit_count, value })
}

/// Render a version as its zero-padded marker digits.
pub fn format_version(version: u32) -> String {
    format!("{:0width$}", version, width = VERSION_WIDTH)
}
