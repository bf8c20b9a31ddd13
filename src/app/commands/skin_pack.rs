//! Name the next skin pack in the workspace skin pack folder.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::versioning;
use crate::ports::DirectoryStore;

/// Options for the skin-pack command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkinPackOptions {
    /// Create the skin pack folder when it is missing.
    pub create: bool,
}

/// Where the next skin pack should be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinPackOutcome {
    pub folder: PathBuf,
    pub latest: Option<PathBuf>,
    pub next: PathBuf,
    pub version: u32,
}

/// Resolve the skin pack folder.
///
/// Returns `None` when the folder is missing and `create` is not set.
pub fn resolve_folder<S: DirectoryStore>(
    ctx: &AppContext<S>,
    create: bool,
) -> Result<Option<PathBuf>, AppError> {
    let folder = ctx.layout().skin_pack_folder().to_path_buf();
    if ctx.store().is_dir(&folder) {
        return Ok(Some(folder));
    }
    if !create {
        return Ok(None);
    }
    ctx.store().create_dir_all(&folder)?;
    info!(folder = %folder.display(), "created skin pack folder");
    Ok(Some(folder))
}

/// Execute the skin-pack command.
pub fn execute<S: DirectoryStore>(
    ctx: &AppContext<S>,
    options: SkinPackOptions,
) -> Result<SkinPackOutcome, AppError> {
    let folder = resolve_folder(ctx, options.create)?.ok_or_else(|| {
        AppError::SkinPackFolderMissing(ctx.layout().skin_pack_folder().display().to_string())
    })?;
    let locator_settings = &ctx.config().locator;

    let latest = ctx.locator().find_latest(&folder, &locator_settings.extension)?;
    let outcome = match latest {
        Some(latest) => {
            let next_name = versioning::next_version_name(&latest.name)?;
            let version = versioning::version_of(&next_name)?;
            SkinPackOutcome {
                latest: Some(latest.full_path()),
                next: folder.join(next_name),
                version,
                folder,
            }
        }
        None => {
            let first = versioning::first_version_name(
                &locator_settings.base_name,
                &locator_settings.extension,
            );
            SkinPackOutcome { latest: None, next: folder.join(first), version: 1, folder }
        }
    };

    info!(next = %outcome.next.display(), version = outcome.version, "next skin pack");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VpackConfig;
    use crate::testing::MockDirectoryStore;
    use std::path::Path;

    fn ctx(store: MockDirectoryStore) -> AppContext<MockDirectoryStore> {
        AppContext::new(store, "/show", VpackConfig::default())
    }

    #[test]
    fn versions_up_latest_pack() {
        let store = MockDirectoryStore::new().with_dir(
            "/show/data/skinPacks",
            &["body_v001.gSkinPack", "body_v003.gSkinPack", "body_v002.gSkinPack", "notes.txt"],
        );
        let outcome = execute(&ctx(store), SkinPackOptions::default()).unwrap();

        assert_eq!(outcome.folder, PathBuf::from("/show/data/skinPacks"));
        assert_eq!(
            outcome.latest,
            Some(PathBuf::from("/show/data/skinPacks/body_v003.gSkinPack"))
        );
        assert_eq!(outcome.next, PathBuf::from("/show/data/skinPacks/body_v004.gSkinPack"));
        assert_eq!(outcome.version, 4);
    }

    #[test]
    fn empty_folder_starts_at_v001() {
        let store = MockDirectoryStore::new().with_dir("/show/data/skinPacks", &[]);
        let outcome = execute(&ctx(store), SkinPackOptions::default()).unwrap();

        assert_eq!(outcome.latest, None);
        assert_eq!(outcome.next, PathBuf::from("/show/data/skinPacks/skinPack_v001.gSkinPack"));
        assert_eq!(outcome.version, 1);
    }

    #[test]
    fn missing_folder_fails_without_create() {
        let err = execute(&ctx(MockDirectoryStore::new()), SkinPackOptions::default()).unwrap_err();
        assert!(
            matches!(err, AppError::SkinPackFolderMissing(path) if path.ends_with("skinPacks"))
        );
    }

    #[test]
    fn create_makes_missing_folder() {
        let context = ctx(MockDirectoryStore::new());
        let outcome = execute(&context, SkinPackOptions { create: true }).unwrap();

        assert!(context.store().is_dir(Path::new("/show/data/skinPacks")));
        assert_eq!(
            context.store().entry_names(Path::new("/show/data")).unwrap(),
            vec!["skinPacks"]
        );
        assert_eq!(outcome.version, 1);
    }

    #[test]
    fn resolve_folder_reports_absence() {
        let context = ctx(MockDirectoryStore::new());
        assert_eq!(resolve_folder(&context, false).unwrap(), None);
        assert!(!context.store().is_dir(Path::new("/show/data/skinPacks")));
    }

    #[test]
    fn latest_pack_at_v999_cannot_be_versioned_up() {
        let store =
            MockDirectoryStore::new().with_dir("/show/data/skinPacks", &["body_v999.gSkinPack"]);
        let err = execute(&ctx(store), SkinPackOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::VersionOverflow { version: 999, .. }));
    }

    #[test]
    fn loose_marker_that_is_not_strict_is_reported() {
        let store = MockDirectoryStore::new()
            .with_dir("/show/data/skinPacks", &["body_v002_wip.gSkinPack"]);
        let err = execute(&ctx(store), SkinPackOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }
}
