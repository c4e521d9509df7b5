//! Configuration loading and root folder resolution
//!
//! The service resolves its settings in priority order:
//! 1. Command-line argument (handled by clap in the binary, passed in here)
//! 2. Environment variable (also handled by clap via `env` attributes)
//! 3. TOML config file (`razzie/config.toml` in the platform config dir)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default HTTP listen port when no tier provides one
pub const DEFAULT_PORT: u16 = 3000;

/// Resolve the root folder holding the database and seed data.
///
/// `cli_arg` carries tiers 1 and 2 (clap merges the flag and the
/// environment variable); tiers 3 and 4 are resolved here.
pub fn resolve_root_folder(cli_arg: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path;
    }

    if let Some(root) = config_file_value("root_folder").and_then(|v| v.as_str().map(PathBuf::from)) {
        return root;
    }

    default_root_folder()
}

/// Resolve the HTTP listen port, same tiers as [`resolve_root_folder`].
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Some(port) = config_file_value("port").and_then(|v| v.as_integer()) {
        if (1..=u16::MAX as i64).contains(&port) {
            return port as u16;
        }
    }

    DEFAULT_PORT
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Path of the SQLite database inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join("razzie.db")
}

/// Path of the optional seed CSV inside the root folder
pub fn seed_csv_path(root: &Path) -> PathBuf {
    root.join("movies.csv")
}

/// Look up a single key in the TOML config file, if one exists
fn config_file_value(key: &str) -> Option<toml::Value> {
    let path = config_file_path().ok()?;
    let content = std::fs::read_to_string(path).ok()?;
    let config = toml::from_str::<toml::Value>(&content).ok()?;
    config.get(key).cloned()
}

/// Locate the configuration file for the platform
fn config_file_path() -> Result<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("razzie").join("config.toml")) {
        if path.exists() {
            return Ok(path);
        }
    }

    // System-wide fallback on Linux
    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/razzie/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("razzie"))
        .unwrap_or_else(|| PathBuf::from("./razzie_data"))
}
