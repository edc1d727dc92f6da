//! Configuration loading and data directory resolution

use std::path::{Path, PathBuf};

/// Name of the SQLite database file inside the data directory
pub const DATABASE_FILE: &str = "gigbook.db";

/// Data directory resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `GIGBOOK_DATA` environment variable
/// 3. `data_dir` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("GIGBOOK_DATA") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return PathBuf::from(data_dir);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_dir()
}

/// Full path of the database file within a data directory
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILE)
}

/// Locate the configuration file for the platform, if one exists
fn find_config_file() -> Option<PathBuf> {
    // ~/.config/gigbook/config.toml (or platform equivalent), then
    // /etc/gigbook/config.toml on Linux
    if let Some(user_config) = dirs::config_dir().map(|d| d.join("gigbook").join("config.toml")) {
        if user_config.exists() {
            return Some(user_config);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/gigbook/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/gigbook (or /var/lib/gigbook for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("gigbook"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/gigbook"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/gigbook
        dirs::data_dir()
            .map(|d| d.join("gigbook"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/gigbook"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\gigbook
        dirs::data_local_dir()
            .map(|d| d.join("gigbook"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\gigbook"))
    } else {
        PathBuf::from("./gigbook_data")
    }
}
