// Skiff platform paths for Linux
// Config: ~/.config/skiffbrowser
// Data:   ~/.local/share/skiffbrowser
// Cache:  ~/.cache/skiffbrowser

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Skiff on Linux.
/// Uses `$XDG_CONFIG_HOME/skiffbrowser` if set, otherwise `~/.config/skiffbrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("skiffbrowser")
    } else {
        home_dir().join(".config").join("skiffbrowser")
    }
}

/// Returns the data directory for Skiff on Linux.
/// Uses `$XDG_DATA_HOME/skiffbrowser` if set, otherwise `~/.local/share/skiffbrowser`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("skiffbrowser")
    } else {
        home_dir().join(".local").join("share").join("skiffbrowser")
    }
}

/// Returns the cache directory for Skiff on Linux.
/// Uses `$XDG_CACHE_HOME/skiffbrowser` if set, otherwise `~/.cache/skiffbrowser`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("skiffbrowser")
    } else {
        home_dir().join(".cache").join("skiffbrowser")
    }
}
