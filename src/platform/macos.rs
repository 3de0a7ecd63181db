// Skiff platform paths for macOS
// Config: ~/Library/Application Support/Skiff
// Data:   ~/Library/Application Support/Skiff
// Cache:  ~/Library/Caches/Skiff

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Skiff on macOS.
/// `~/Library/Application Support/Skiff`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Skiff")
}

/// Returns the data directory for Skiff on macOS.
/// `~/Library/Application Support/Skiff`
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Returns the cache directory for Skiff on macOS.
/// `~/Library/Caches/Skiff`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("Skiff")
}
