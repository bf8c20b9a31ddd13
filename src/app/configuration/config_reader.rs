//! Configuration loading from the workspace root.

use std::path::Path;

use tracing::debug;

use crate::domain::configuration::{CONFIG_FILE, parse_config_content};
use crate::domain::{AppError, VpackConfig};
use crate::ports::DirectoryStore;

/// Load `vpack.toml` from the workspace root, falling back to defaults when absent.
pub fn load_config<S: DirectoryStore>(root: &Path, store: &S) -> Result<VpackConfig, AppError> {
    let config_path = root.join(CONFIG_FILE);
    match store.read_optional_file(&config_path)? {
        Some(content) => {
            debug!(path = %config_path.display(), "loading configuration");
            parse_config_content(&content).map_err(|err| match err {
                AppError::Configuration(message) => AppError::Configuration(format!(
                    "{}: {}",
                    config_path.display(),
                    message
                )),
                other => other,
            })
        }
        None => {
            debug!(path = %config_path.display(), "no configuration file, using defaults");
            Ok(VpackConfig::default())
        }
    }
}
