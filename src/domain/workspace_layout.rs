//! Folder layout of a rigging workspace.

use std::path::{Component, Path, PathBuf};

use crate::domain::configuration::WorkspaceSettings;

/// Resolved data and skin pack folders for a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
    data_folder: PathBuf,
    skin_pack_folder: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: impl Into<PathBuf>, settings: &WorkspaceSettings) -> Self {
        let root = root.into();
        let data_folder = root.join(&settings.data_dir);
        let skin_pack_folder = data_folder.join(&settings.skin_pack_dir);
        Self { root, data_folder, skin_pack_folder }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/data` by default.
    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// `<root>/data/skinPacks` by default.
    pub fn skin_pack_folder(&self) -> &Path {
        &self.skin_pack_folder
    }
}

/// Normalize a path by resolving `.` and `..` components logically.
///
/// This does not access the filesystem, so `..` may cancel a directory that
/// does not exist. Leading `..` of a relative path are kept, `..` at the root
/// is dropped, and a path that cancels out entirely becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::Prefix(..) | Component::RootDir) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    normalized.push(Component::ParentDir.as_os_str());
                }
            },
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(Component::CurDir.as_os_str());
    }
    normalized
}
