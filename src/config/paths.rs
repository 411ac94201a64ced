use std::path::PathBuf;

use crate::constants::APP_DIR_NAME;

/// `{config_dir}/dynasty_analyzer`, or `./dynasty_analyzer` on platforms
/// without a config directory.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().into_owned()
}

/// Default directory for the rolling log file
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().into_owned()
}
