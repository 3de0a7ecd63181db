//! Sessions Manager for Skiff.
//!
//! Tracks the open main windows of the running browser, the undo-close stack,
//! and dirty-state for the current session, and drives the on-disk session
//! store. Constructed once by the application shell and handed to UI
//! collaborators; all operations run on the UI event-processing thread.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::platform;
use crate::services::session_store::{SessionStore, SessionStoreTrait};
use crate::types::errors::SessionError;
use crate::types::events::SessionEvent;
use crate::types::session::{
    ClosedWindow, SessionInformation, SessionMainWindow, SessionWindow,
};
use crate::types::settings::SessionSettings;

/// Session name used when the shell does not pick one.
pub const DEFAULT_SESSION: &str = "default";

/// Listener invoked for every emitted [`SessionEvent`].
pub type SessionListener = Box<dyn Fn(&SessionEvent)>;

/// Trait defining session management operations.
pub trait SessionsManagerTrait {
    fn save_session(
        &mut self,
        path: Option<&str>,
        title: Option<&str>,
        is_clean: bool,
    ) -> Result<(), SessionError>;
    fn save_session_info(&self, session: &SessionInformation) -> Result<(), SessionError>;
    fn restore_session(
        &mut self,
        session: &SessionInformation,
        is_private: bool,
    ) -> Result<(), SessionError>;
    fn delete_session(&mut self, path: &str) -> Result<(), SessionError>;
    fn get_session(&self, path: &str) -> Result<SessionInformation, SessionError>;
    fn get_sessions(&self) -> Vec<String>;
    fn store_closed_window(&mut self, window: SessionWindow);
    fn restore_closed_window(&mut self, index: i32) -> Result<SessionWindow, SessionError>;
    fn clear_closed_windows(&mut self);
    fn get_closed_windows(&self) -> Vec<String>;
    fn mark_session_modified(&mut self);
    fn remove_stored_url(&mut self, url: &str);
    fn has_url(&mut self, url: &str, activate: bool) -> bool;
    fn tick(&mut self, now: Instant) -> Result<bool, SessionError>;
}

/// Sessions manager owning the current session's in-memory state.
pub struct SessionsManager {
    profile_path: PathBuf,
    cache_path: PathBuf,
    is_private: bool,
    is_read_only: bool,
    settings: SessionSettings,
    store: SessionStore,
    session_path: String,
    session_title: String,
    main_windows: Vec<SessionMainWindow>,
    active_window: i32,
    closed_windows: Vec<ClosedWindow>,
    has_private_windows: bool,
    is_dirty: bool,
    save_deadline: Option<Instant>,
    listeners: Vec<SessionListener>,
}

impl SessionsManager {
    /// Creates a manager for the given profile.
    ///
    /// A private manager never persists anything; a read-only manager refuses
    /// all mutating store operations.
    pub fn new(
        profile_path: impl Into<PathBuf>,
        cache_path: impl Into<PathBuf>,
        is_private: bool,
        is_read_only: bool,
        settings: SessionSettings,
    ) -> Self {
        let profile_path = profile_path.into();
        let store = SessionStore::new(&profile_path);

        Self {
            profile_path,
            cache_path: cache_path.into(),
            is_private,
            is_read_only,
            settings,
            store,
            session_path: DEFAULT_SESSION.to_string(),
            session_title: String::new(),
            main_windows: Vec::new(),
            active_window: -1,
            closed_windows: Vec::new(),
            has_private_windows: false,
            is_dirty: false,
            save_deadline: None,
            listeners: Vec::new(),
        }
    }

    /// Creates a manager rooted at the platform-default profile and cache
    /// directories.
    pub fn with_default_paths(
        is_private: bool,
        is_read_only: bool,
        settings: SessionSettings,
    ) -> Self {
        Self::new(
            platform::get_data_dir().join("profile"),
            platform::get_cache_dir(),
            is_private,
            is_read_only,
            settings,
        )
    }

    /// Registers a listener for manager notifications.
    pub fn subscribe(&mut self, listener: SessionListener) {
        self.listeners.push(listener);
    }

    pub fn profile_path(&self) -> &Path {
        &self.profile_path
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Name of the session the manager is currently tracking.
    pub fn current_session(&self) -> &str {
        &self.session_path
    }

    /// Resolves a session name to its file path in the profile.
    pub fn get_session_path(&self, name: &str) -> PathBuf {
        self.store.session_path(name)
    }

    /// Whether a mutation is waiting on the debounced save.
    pub fn has_pending_save(&self) -> bool {
        self.save_deadline.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Whether the tracked windows came from a private restore and are
    /// excluded from persistence.
    pub fn has_private_windows(&self) -> bool {
        self.has_private_windows
    }

    // --- live window tracking ---

    /// Registers a newly opened main window; returns its index.
    ///
    /// The first registered window becomes the active one.
    pub fn register_main_window(&mut self, window: SessionMainWindow) -> usize {
        self.main_windows.push(window);

        if self.active_window < 0 {
            self.active_window = (self.main_windows.len() - 1) as i32;
        }

        self.mark_session_modified();
        self.main_windows.len() - 1
    }

    /// Removes a main window from tracking, returning its last state.
    pub fn remove_main_window(&mut self, index: usize) -> Option<SessionMainWindow> {
        if index >= self.main_windows.len() {
            return None;
        }

        let window = self.main_windows.remove(index);

        if self.main_windows.is_empty() {
            self.active_window = -1;
            self.has_private_windows = false;
        } else if self.active_window as usize >= self.main_windows.len() {
            self.active_window = (self.main_windows.len() - 1) as i32;
        }

        self.mark_session_modified();
        Some(window)
    }

    /// Mutable access for UI-driven updates (navigation, geometry changes).
    /// Callers follow up with [`SessionsManagerTrait::mark_session_modified`].
    pub fn main_window_mut(&mut self, index: usize) -> Option<&mut SessionMainWindow> {
        self.main_windows.get_mut(index)
    }

    pub fn main_windows(&self) -> &[SessionMainWindow] {
        &self.main_windows
    }

    pub fn active_window(&self) -> i32 {
        self.active_window
    }

    /// The undo-close stack, most recently closed first.
    pub fn closed_windows(&self) -> &[ClosedWindow] {
        &self.closed_windows
    }

    pub fn set_active_window(&mut self, index: i32) {
        if index >= -1 && index < self.main_windows.len() as i32 {
            self.active_window = index;
        }
    }

    // --- internals ---

    fn notify(&self, event: &SessionEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    fn snapshot(&self, is_clean: bool) -> SessionInformation {
        SessionInformation {
            path: self.session_path.clone(),
            title: self.session_title.clone(),
            windows: self.main_windows.clone(),
            index: self.active_window,
            is_clean,
        }
    }

    /// Rebuilds the neighbor links of the undo-close stack to match list
    /// order after any structural change.
    fn relink_closed_windows(&mut self) {
        let ids: Vec<String> = self.closed_windows.iter().map(|w| w.id.clone()).collect();

        for (i, record) in self.closed_windows.iter_mut().enumerate() {
            record.previous_window = if i > 0 { Some(ids[i - 1].clone()) } else { None };
            record.next_window = ids.get(i + 1).cloned();
        }
    }

    fn validate(session: &SessionInformation) -> Result<(), SessionError> {
        if session.windows.is_empty() {
            return Err(SessionError::MalformedSession(
                "session has no windows".to_string(),
            ));
        }

        if session.index >= session.windows.len() as i32 {
            return Err(SessionError::MalformedSession(format!(
                "active window index {} out of range",
                session.index
            )));
        }

        for main_window in &session.windows {
            if main_window.index >= main_window.windows.len() as i32 {
                return Err(SessionError::MalformedSession(format!(
                    "active tab index {} out of range",
                    main_window.index
                )));
            }

            for window in &main_window.windows {
                if window.history_index >= window.history.len() as i32 {
                    return Err(SessionError::MalformedSession(format!(
                        "history index {} out of range",
                        window.history_index
                    )));
                }
            }
        }

        Ok(())
    }
}

impl SessionsManagerTrait for SessionsManager {
    /// Saves the tracked state as the current session.
    ///
    /// `path` and `title` rename the current session first when given.
    /// `is_clean` records whether this snapshot comes from an orderly
    /// shutdown; debounced mid-run saves pass `false`. Refused while the
    /// tracked state holds privately restored windows.
    fn save_session(
        &mut self,
        path: Option<&str>,
        title: Option<&str>,
        is_clean: bool,
    ) -> Result<(), SessionError> {
        if self.is_read_only || self.is_private || self.has_private_windows {
            return Err(SessionError::ReadOnly);
        }

        if let Some(path) = path {
            self.session_path = path.to_string();
        }

        if let Some(title) = title {
            self.session_title = title.to_string();
        }

        let session = self.snapshot(is_clean);
        self.store.save(&session)?;

        self.is_dirty = false;
        self.save_deadline = None;

        Ok(())
    }

    /// Saves an explicitly assembled session without touching tracked state.
    fn save_session_info(&self, session: &SessionInformation) -> Result<(), SessionError> {
        if self.is_read_only || self.is_private {
            return Err(SessionError::ReadOnly);
        }

        self.store.save(session)
    }

    /// Replaces the tracked state with a persisted session.
    ///
    /// A private restore leaves the current session name untouched and
    /// flags the tracked windows as private, so they are never written
    /// back over a named session; a later non-private restore lifts the
    /// flag.
    fn restore_session(
        &mut self,
        session: &SessionInformation,
        is_private: bool,
    ) -> Result<(), SessionError> {
        Self::validate(session)?;

        if !is_private && !self.is_private {
            if !session.path.is_empty() {
                self.session_path = session.path.clone();
            }
            self.session_title = session.title.clone();
        }

        self.has_private_windows = is_private;

        self.main_windows = session.windows.clone();
        self.active_window = if session.index < 0 { 0 } else { session.index };
        self.is_dirty = false;
        self.save_deadline = None;

        Ok(())
    }

    fn delete_session(&mut self, path: &str) -> Result<(), SessionError> {
        if self.is_read_only {
            return Err(SessionError::ReadOnly);
        }

        self.store.delete(path)
    }

    fn get_session(&self, path: &str) -> Result<SessionInformation, SessionError> {
        self.store.load(path)
    }

    fn get_sessions(&self) -> Vec<String> {
        self.store.list()
    }

    /// Snapshots a closing tab onto the undo-close stack, most recent first.
    ///
    /// Records beyond the configured retention limit are evicted from the
    /// tail; a limit of zero disables the stack entirely. Emits
    /// [`SessionEvent::ClosedWindowsChanged`].
    fn store_closed_window(&mut self, window: SessionWindow) {
        if self.settings.closed_window_limit == 0 {
            return;
        }

        let record = ClosedWindow {
            id: Uuid::new_v4().to_string(),
            window,
            next_window: None,
            previous_window: None,
            is_private: self.is_private,
        };

        self.closed_windows.insert(0, record);
        self.closed_windows.truncate(self.settings.closed_window_limit);
        self.relink_closed_windows();

        self.mark_session_modified();
        self.notify(&SessionEvent::ClosedWindowsChanged);
    }

    /// Pops a record off the undo-close stack and reattaches it to the
    /// active main window, returning the restored tab state.
    ///
    /// A negative index means "most recent". Fails when the stack is empty
    /// or the index is out of range.
    fn restore_closed_window(&mut self, index: i32) -> Result<SessionWindow, SessionError> {
        let position = if index < 0 { 0 } else { index as usize };

        if position >= self.closed_windows.len() {
            return Err(SessionError::InvalidIndex(index));
        }

        let record = self.closed_windows.remove(position);
        self.relink_closed_windows();

        if self.main_windows.is_empty() {
            self.main_windows.push(SessionMainWindow::default());
            self.active_window = 0;
        }

        let active = self.active_window.max(0) as usize;
        let main_window = &mut self.main_windows[active];
        main_window.windows.push(record.window.clone());
        main_window.index = (main_window.windows.len() - 1) as i32;

        self.mark_session_modified();
        self.notify(&SessionEvent::ClosedWindowsChanged);

        Ok(record.window)
    }

    /// Empties the undo-close stack and notifies listeners.
    fn clear_closed_windows(&mut self) {
        if self.closed_windows.is_empty() {
            return;
        }

        self.closed_windows.clear();
        self.notify(&SessionEvent::ClosedWindowsChanged);
    }

    /// Display titles of the undo-close stack, most recent first.
    fn get_closed_windows(&self) -> Vec<String> {
        self.closed_windows
            .iter()
            .map(|record| record.window.title(&self.settings))
            .collect()
    }

    /// Flags the current session dirty and arms the debounced save.
    ///
    /// Repeated calls within the quiet period do not push the deadline out,
    /// so a burst of mutations produces a single save.
    fn mark_session_modified(&mut self) {
        self.is_dirty = true;

        if self.save_deadline.is_none() {
            self.save_deadline =
                Some(Instant::now() + Duration::from_millis(self.settings.save_debounce_ms));
        }
    }

    /// Scrubs a url from the undo-close stack and asks collaborators to do
    /// the same with their stored state.
    fn remove_stored_url(&mut self, url: &str) {
        let before = self.closed_windows.len();
        self.closed_windows.retain(|record| record.window.url() != url);

        if self.closed_windows.len() != before {
            self.relink_closed_windows();
            self.notify(&SessionEvent::ClosedWindowsChanged);
        }

        self.notify(&SessionEvent::RemoveStoredUrlRequested(url.to_string()));
    }

    /// Scans tracked windows for a tab currently showing `url`; with
    /// `activate`, focuses the matching window and tab.
    fn has_url(&mut self, url: &str, activate: bool) -> bool {
        let found = self.main_windows.iter().enumerate().find_map(|(wi, mw)| {
            mw.windows
                .iter()
                .position(|window| window.url() == url)
                .map(|ti| (wi, ti))
        });

        match found {
            Some((window_index, tab_index)) => {
                if activate {
                    self.active_window = window_index as i32;
                    self.main_windows[window_index].index = tab_index as i32;
                }
                true
            }
            None => false,
        }
    }

    /// Pumped by the UI event loop. Runs the debounced save when its
    /// deadline has passed and the session is still dirty; returns whether
    /// a save happened.
    ///
    /// Read-only and private managers, and tracked state holding privately
    /// restored windows, disarm the deadline without saving.
    fn tick(&mut self, now: Instant) -> Result<bool, SessionError> {
        match self.save_deadline {
            Some(deadline) if now >= deadline => {
                self.save_deadline = None;

                if !self.is_dirty {
                    return Ok(false);
                }

                if self.is_read_only || self.is_private || self.has_private_windows {
                    self.is_dirty = false;
                    return Ok(false);
                }

                self.save_session(None, None, false)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
