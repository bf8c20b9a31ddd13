mod vpack_config;

pub use vpack_config::{
    CONFIG_FILE, LocatorSettings, VpackConfig, WorkspaceSettings, parse_config_content,
};
