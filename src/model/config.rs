use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// User configuration, read from `config.toml` in the config directory.
/// Every field is optional; a missing file means all defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Override for the data file the list is persisted in.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `accent = "#5A96FA"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
