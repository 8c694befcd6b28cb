use std::path::{Path, PathBuf};

use crate::model::config::Config;

const APP_DIR: &str = "jot";

/// `<config_dir>/jot/config.toml`, falling back to the current directory
/// when the platform has no config dir (headless CI).
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// Default location of the persisted list.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("entries.json")
}

/// Log file next to the data file's directory.
pub fn log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("jot.log")
}

/// Data file precedence: command line, then config, then the default.
pub fn resolve_data_file(override_path: Option<&Path>, config: &Config) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(default_data_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_override_then_config() {
        let mut config = Config::default();
        assert_eq!(resolve_data_file(None, &config), default_data_file());
        config.data_file = Some(PathBuf::from("/tmp/from-config.json"));
        assert_eq!(
            resolve_data_file(None, &config),
            PathBuf::from("/tmp/from-config.json")
        );
        assert_eq!(
            resolve_data_file(Some(Path::new("/tmp/cli.json")), &config),
            PathBuf::from("/tmp/cli.json")
        );
    }

    #[test]
    fn paths_end_with_expected_names() {
        assert!(config_file().ends_with("jot/config.toml"));
        assert!(default_data_file().ends_with("jot/entries.json"));
        assert!(log_file().ends_with("jot/jot.log"));
    }
}
