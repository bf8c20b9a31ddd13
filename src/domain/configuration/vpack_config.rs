//! `vpack.toml` configuration model.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::versioning::TieBreak;

/// File name of the optional configuration at the workspace root.
pub const CONFIG_FILE: &str = "vpack.toml";

/// Configuration loaded from `vpack.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpackConfig {
    /// Workspace folder layout.
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    /// Latest-file lookup settings.
    #[serde(default)]
    pub locator: LocatorSettings,
}

impl VpackConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.workspace.validate()?;
        self.locator.validate()?;
        Ok(())
    }
}

/// Folder names under the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSettings {
    /// Data folder, relative to the workspace root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Skin pack folder, relative to the data folder.
    #[serde(default = "default_skin_pack_dir")]
    pub skin_pack_dir: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), skin_pack_dir: default_skin_pack_dir() }
    }
}

impl WorkspaceSettings {
    fn validate(&self) -> Result<(), AppError> {
        validate_relative_dir("workspace.data_dir", &self.data_dir)?;
        validate_relative_dir("workspace.skin_pack_dir", &self.skin_pack_dir)?;
        Ok(())
    }
}

/// Settings for finding and naming versioned files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocatorSettings {
    /// Extension used when none is given on the command line.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Base name for the first version when a folder holds no versioned file.
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Resolution of equal highest versions.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            base_name: default_base_name(),
            tie_break: TieBreak::default(),
        }
    }
}

impl LocatorSettings {
    fn validate(&self) -> Result<(), AppError> {
        if self.extension.len() < 2 || !self.extension.starts_with('.') {
            return Err(AppError::config_error(format!(
                "locator.extension must start with '.' and name an extension (got '{}')",
                self.extension
            )));
        }
        if self.base_name.trim().is_empty() {
            return Err(AppError::config_error("locator.base_name must not be empty"));
        }
        if self.base_name.contains(std::path::is_separator) {
            return Err(AppError::config_error(format!(
                "locator.base_name must be a plain file name (got '{}')",
                self.base_name
            )));
        }
        Ok(())
    }
}

fn validate_relative_dir(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    let escapes = Path::new(value)
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AppError::config_error(format!(
            "{} must be a relative path inside the workspace (got '{}')",
            key, value
        )));
    }
    Ok(())
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_skin_pack_dir() -> String {
    "skinPacks".to_string()
}

fn default_extension() -> String {
    ".gSkinPack".to_string()
}

fn default_base_name() -> String {
    "skinPack".to_string()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<VpackConfig, AppError> {
    let config: VpackConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
