use serde::{Deserialize, Serialize};

/// Session subsystem configuration.
///
/// Injected explicitly by the application shell; the data model and manager
/// never read ambient settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    /// Zoom percentage applied to new history entries and used as the
    /// fallback for out-of-bounds history indices.
    pub default_zoom: i32,
    /// Url of the configured start page.
    pub start_page_url: String,
    /// Whether empty urls are presented as the start page.
    pub start_page_enabled: bool,
    /// Whether newly opened tabs start maximized.
    pub maximize_new_tabs: bool,
    /// Maximum number of records kept on the undo-close stack; the oldest
    /// records are evicted beyond this.
    pub closed_window_limit: usize,
    /// Quiet period after a session mutation before the debounced save runs.
    pub save_debounce_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_zoom: 100,
            start_page_url: "about:start".to_string(),
            start_page_enabled: true,
            maximize_new_tabs: false,
            closed_window_limit: 50,
            save_debounce_ms: 1000,
        }
    }
}
