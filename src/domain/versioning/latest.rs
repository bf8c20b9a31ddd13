use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

use super::marker::VersionMarker;

/// How to choose between candidates that share the highest version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the candidate that appeared first in listing order.
    #[default]
    FirstSeen,
    /// Keep the lexicographically greatest name.
    Lexicographic,
}

impl TieBreak {
    pub fn label(self) -> &'static str {
        match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::Lexicographic => "lexicographic",
        }
    }
}

impl FromStr for TieBreak {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(TieBreak::FirstSeen),
            "lexicographic" => Ok(TieBreak::Lexicographic),
            _ => Err(AppError::config_error(format!(
                "Invalid tie-break '{}'. Expected 'first-seen' or 'lexicographic'.",
                s
            ))),
        }
    }
}

/// The highest-versioned file found in a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestFile {
    pub directory: PathBuf,
    pub name: String,
    pub version: u32,
}

impl LatestFile {
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }

    pub fn in_directory(directory: &Path, name: String, version: u32) -> Self {
        Self { directory: directory.to_path_buf(), name, version }
    }
}

/// Pick the highest-versioned candidate.
///
/// Each candidate's version is the full digit run of the rightmost `_vNNN`
/// marker in the name once `extension` is stripped, so `a_v1000.ext` outranks
/// `a_v999.ext`. Candidates without a marker are skipped.
pub fn select_latest<'a, I>(
    candidates: I,
    extension: &str,
    tie_break: TieBreak,
) -> Option<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u32)> = None;
    for name in candidates {
        let stem = name.strip_suffix(extension).unwrap_or(name);
        let Some(marker) = VersionMarker::find_loose(stem) else {
            continue;
        };
        let version = marker.value();
        let replace = match best {
            None => true,
            Some((best_name, best_version)) => {
                version > best_version
                    || (version == best_version
                        && tie_break == TieBreak::Lexicographic
                        && name > best_name)
            }
        };
        if replace {
            best = Some((name, version));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_version() {
        let names = ["a_v001.ext", "a_v003.ext", "a_v002.ext"];
        assert_eq!(select_latest(names, ".ext", TieBreak::FirstSeen), Some(("a_v003.ext", 3)));
    }

    #[test]
    fn skips_names_without_marker() {
        assert_eq!(select_latest(["a.ext", "b.ext"], ".ext", TieBreak::FirstSeen), None);
        assert_eq!(
            select_latest(["a.ext", "b_v004.ext"], ".ext", TieBreak::FirstSeen),
            Some(("b_v004.ext", 4))
        );
    }

    #[test]
    fn empty_input_has_no_latest() {
        assert_eq!(select_latest(Vec::<&str>::new(), ".ext", TieBreak::FirstSeen), None);
    }

    #[test]
    fn first_seen_keeps_earlier_tie() {
        let names = ["z_v002.ext", "a_v002.ext"];
        assert_eq!(select_latest(names, ".ext", TieBreak::FirstSeen), Some(("z_v002.ext", 2)));
    }

    #[test]
    fn lexicographic_keeps_greatest_name_on_tie() {
        let names = ["a_v002.ext", "z_v002.ext", "m_v002.ext"];
        assert_eq!(select_latest(names, ".ext", TieBreak::Lexicographic), Some(("z_v002.ext", 2)));
    }

    #[test]
    fn marker_need_not_end_the_name() {
        let names = ["shot_v004_final.ext", "shot_v003.ext"];
        assert_eq!(
            select_latest(names, ".ext", TieBreak::FirstSeen),
            Some(("shot_v004_final.ext", 4))
        );
    }

    #[test]
    fn rightmost_marker_wins() {
        let names = ["a_v009_b_v001.ext", "a_v002.ext"];
        assert_eq!(select_latest(names, ".ext", TieBreak::FirstSeen), Some(("a_v002.ext", 2)));
    }

    #[test]
    fn four_digit_versions_outrank_three_digit_ones() {
        let names = ["a_v999.ext", "a_v1000.ext"];
        assert_eq!(select_latest(names, ".ext", TieBreak::FirstSeen), Some(("a_v1000.ext", 1000)));
    }

    #[test]
    fn tie_break_parses_labels() {
        assert_eq!("first-seen".parse::<TieBreak>().unwrap(), TieBreak::FirstSeen);
        assert_eq!("lexicographic".parse::<TieBreak>().unwrap(), TieBreak::Lexicographic);
        assert!("newest".parse::<TieBreak>().is_err());
        assert_eq!(TieBreak::Lexicographic.label(), "lexicographic");
    }

    #[test]
    fn full_path_joins_directory() {
        let latest = LatestFile::in_directory(Path::new("/packs"), "a_v001.ext".to_string(), 1);
        assert_eq!(latest.full_path(), PathBuf::from("/packs/a_v001.ext"));
    }
}
