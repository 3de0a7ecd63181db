// Skiff platform paths for Windows
// Config: %APPDATA%/Skiff
// Data:   %APPDATA%/Skiff
// Cache:  %LOCALAPPDATA%/Skiff/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Skiff on Windows.
/// `%APPDATA%/Skiff`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Skiff")
}

/// Returns the data directory for Skiff on Windows.
/// `%APPDATA%/Skiff`
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Returns the cache directory for Skiff on Windows.
/// `%LOCALAPPDATA%/Skiff/cache`
pub fn get_cache_dir() -> PathBuf {
    let local = env::var("LOCALAPPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(local).join("Skiff").join("cache")
}
