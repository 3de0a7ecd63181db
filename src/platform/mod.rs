// Skiff platform abstraction
// Provides platform-specific profile and cache paths for Windows, macOS,
// and Linux, selected with cfg(target_os) at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Skiff.
///
/// - **Linux**: `~/.config/skiffbrowser` (or `$XDG_CONFIG_HOME/skiffbrowser`)
/// - **macOS**: `~/Library/Application Support/Skiff`
/// - **Windows**: `%APPDATA%/Skiff`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for Skiff. Profiles (and
/// their session files) live under this directory.
///
/// - **Linux**: `~/.local/share/skiffbrowser` (or `$XDG_DATA_HOME/skiffbrowser`)
/// - **macOS**: `~/Library/Application Support/Skiff`
/// - **Windows**: `%APPDATA%/Skiff`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for Skiff.
///
/// - **Linux**: `~/.cache/skiffbrowser` (or `$XDG_CACHE_HOME/skiffbrowser`)
/// - **macOS**: `~/Library/Caches/Skiff`
/// - **Windows**: `%LOCALAPPDATA%/Skiff/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}
