//! vpack: find the latest `_vNNN` versioned file in a folder and name the next one.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    LatestOptions, ListOptions, SkinPackOptions, SkinPackOutcome, config_at, latest, latest_at,
    list, list_at, next_version_name, skin_pack, skin_pack_at, version_of,
};
pub use app::services::VersionedFileLocator;
pub use domain::{AppError, LatestFile, TieBreak, VersionedName, VpackConfig};
