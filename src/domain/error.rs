use std::io;

use thiserror::Error;

/// Library-wide error type for vpack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// File name does not follow the `<name>_vNNN.<ext>` convention.
    #[error("'{0}' does not match the version naming convention (<name>_vNNN.<ext>)")]
    Format(String),

    /// Version marker cannot be incremented within three digits.
    #[error("Cannot version up '{name}': v{version:03} is the last three-digit version")]
    VersionOverflow { name: String, version: u32 },

    /// Directory to scan does not exist.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// Skin pack folder is missing and was not requested to be created.
    #[error("Skin pack folder not found: {0}. Pass --create to create it.")]
    SkinPackFolderMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Unexpected internal failure (e.g. output serialization).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Format(_)
            | AppError::VersionOverflow { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DirectoryNotFound(_) | AppError::SkinPackFolderMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
