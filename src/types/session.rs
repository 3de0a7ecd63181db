use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::settings::SessionSettings;

/// Title shown for a tab whose current entry has no usable title.
pub const UNTITLED_LABEL: &str = "(Untitled)";

/// Title shown for a tab sitting on the start page.
pub const START_PAGE_LABEL: &str = "Start Page";

/// Display state of a tab's container window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

/// Screen-space window geometry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Scroll position within a web page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

/// A single visited-page record in a tab's navigation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub position: ScrollPosition,
    pub zoom: i32,
}

impl HistoryEntry {
    /// Creates an entry for `url` with the configured default zoom.
    pub fn new(url: impl Into<String>, settings: &SessionSettings) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            position: ScrollPosition::default(),
            zoom: settings.default_zoom,
        }
    }
}

/// A tab's full navigation history plus the current position within it.
///
/// `index` is `-1` while the history is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowHistory {
    pub entries: Vec<HistoryEntry>,
    pub index: i32,
}

impl Default for WindowHistory {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: -1,
        }
    }
}

impl WindowHistory {
    /// Returns the entry at the current index, if the index is in bounds.
    pub fn current(&self) -> Option<&HistoryEntry> {
        entry_at(&self.entries, self.index)
    }
}

/// One browser tab's state as stored in a session.
///
/// Current url/title/zoom are derived from the entry at `history_index`,
/// never stored separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionWindow {
    pub geometry: Rect,
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,
    pub history: Vec<HistoryEntry>,
    pub state: WindowState,
    pub parent_group: i32,
    pub history_index: i32,
    pub always_on_top: bool,
    pub pinned: bool,
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self {
            geometry: Rect::default(),
            options: HashMap::new(),
            history: Vec::new(),
            state: WindowState::Normal,
            parent_group: 0,
            history_index: -1,
            always_on_top: false,
            pinned: false,
        }
    }
}

impl SessionWindow {
    /// Creates an empty tab whose window state honors the configured
    /// new-tab opening behavior.
    pub fn with_defaults(settings: &SessionSettings) -> Self {
        Self {
            state: if settings.maximize_new_tabs {
                WindowState::Maximized
            } else {
                WindowState::Normal
            },
            ..Self::default()
        }
    }

    /// Replaces the whole history in one step, as navigation does.
    pub fn set_history(&mut self, history: WindowHistory) {
        self.history = history.entries;
        self.history_index = history.index;
    }

    fn current_entry(&self) -> Option<&HistoryEntry> {
        entry_at(&self.history, self.history_index)
    }

    /// Url of the current history entry, or an empty string when the
    /// history index is out of bounds.
    pub fn url(&self) -> String {
        self.current_entry()
            .map(|entry| entry.url.clone())
            .unwrap_or_default()
    }

    /// Display title for this tab.
    ///
    /// Falls back from the stored entry title to the start-page label (when
    /// the current url is the configured start page, or is empty while the
    /// start page is enabled), and finally to the untitled label.
    pub fn title(&self, settings: &SessionSettings) -> String {
        if let Some(entry) = self.current_entry() {
            if !entry.title.is_empty() {
                return entry.title.clone();
            }

            if entry.url == settings.start_page_url
                || (settings.start_page_enabled && is_url_empty(&entry.url))
            {
                return START_PAGE_LABEL.to_string();
            }
        }

        UNTITLED_LABEL.to_string()
    }

    /// Zoom level of the current history entry, or the configured default
    /// when the history index is out of bounds.
    pub fn zoom(&self, settings: &SessionSettings) -> i32 {
        self.current_entry()
            .map(|entry| entry.zoom)
            .unwrap_or(settings.default_zoom)
    }
}

/// A top-level browser window: its tabs, serialized widget geometry, and
/// the active-tab index (`-1` when no tab is active).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionMainWindow {
    pub windows: Vec<SessionWindow>,
    #[serde(with = "base64_blob", default)]
    pub geometry: Vec<u8>,
    pub index: i32,
}

impl Default for SessionMainWindow {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            geometry: Vec::new(),
            index: -1,
        }
    }
}

/// A complete named session: all main windows, the active-window index,
/// and whether the snapshot was written by an orderly shutdown.
///
/// `path` is the session's address in the store, assigned on load; it is
/// not written into the file itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInformation {
    #[serde(skip)]
    pub path: String,
    pub title: String,
    pub windows: Vec<SessionMainWindow>,
    pub index: i32,
    pub is_clean: bool,
}

impl Default for SessionInformation {
    fn default() -> Self {
        Self {
            path: String::new(),
            title: String::new(),
            windows: Vec::new(),
            index: -1,
            is_clean: true,
        }
    }
}

/// A closed tab's saved state on the undo-close stack.
///
/// `previous_window` links toward the more recently closed neighbor,
/// `next_window` toward the older one; ids are opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedWindow {
    pub id: String,
    pub window: SessionWindow,
    pub next_window: Option<String>,
    pub previous_window: Option<String>,
    pub is_private: bool,
}

/// Returns true for urls treated as "no page": blank or the empty page.
pub fn is_url_empty(url: &str) -> bool {
    url.trim().is_empty() || url == "about:blank"
}

fn entry_at(entries: &[HistoryEntry], index: i32) -> Option<&HistoryEntry> {
    if index >= 0 {
        entries.get(index as usize)
    } else {
        None
    }
}

/// Serializes the binary main-window geometry blob as base64 text so the
/// session files stay valid JSON.
mod base64_blob {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
