//! Unit tests for the SessionsManager public API: save/restore/delete,
//! url scanning, and the debounced save.

use std::time::{Duration, Instant};

use skiffbrowser::managers::sessions_manager::{SessionsManager, SessionsManagerTrait};
use skiffbrowser::types::errors::SessionError;
use skiffbrowser::types::session::{
    HistoryEntry, ScrollPosition, SessionInformation, SessionMainWindow, SessionWindow,
};
use skiffbrowser::types::settings::SessionSettings;
use tempfile::TempDir;

fn manager(dir: &TempDir) -> SessionsManager {
    SessionsManager::new(
        dir.path(),
        dir.path().join("cache"),
        false,
        false,
        SessionSettings::default(),
    )
}

fn tab(url: &str, title: &str) -> SessionWindow {
    SessionWindow {
        history: vec![HistoryEntry {
            url: url.to_string(),
            title: title.to_string(),
            position: ScrollPosition::default(),
            zoom: 100,
        }],
        history_index: 0,
        ..SessionWindow::default()
    }
}

fn main_window(tabs: Vec<SessionWindow>) -> SessionMainWindow {
    let index = if tabs.is_empty() { -1 } else { 0 };
    SessionMainWindow {
        windows: tabs,
        geometry: Vec::new(),
        index,
    }
}

fn after_debounce(settings: &SessionSettings) -> Instant {
    Instant::now() + Duration::from_millis(settings.save_debounce_ms * 2)
}

#[test]
fn test_save_and_reload_current_session() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://example.com", "Example")]));
    mgr.save_session(Some("work"), Some("Work"), true).unwrap();

    let loaded = mgr.get_session("work").unwrap();
    assert_eq!(loaded.title, "Work");
    assert_eq!(loaded.windows.len(), 1);
    assert_eq!(loaded.windows[0].windows[0].url(), "https://example.com");
    assert!(loaded.is_clean);
    assert_eq!(mgr.current_session(), "work");
}

#[test]
fn test_read_only_manager_rejects_mutations() {
    let dir = TempDir::new().unwrap();
    let mut mgr = SessionsManager::new(
        dir.path(),
        dir.path().join("cache"),
        false,
        true,
        SessionSettings::default(),
    );

    assert!(matches!(
        mgr.save_session(None, None, true),
        Err(SessionError::ReadOnly)
    ));
    assert!(matches!(
        mgr.save_session_info(&SessionInformation::default()),
        Err(SessionError::ReadOnly)
    ));
    assert!(matches!(
        mgr.delete_session("work"),
        Err(SessionError::ReadOnly)
    ));
}

#[test]
fn test_private_manager_never_persists() {
    let dir = TempDir::new().unwrap();
    let mut mgr = SessionsManager::new(
        dir.path(),
        dir.path().join("cache"),
        true,
        false,
        SessionSettings::default(),
    );

    mgr.register_main_window(main_window(vec![tab("https://example.com", "Example")]));
    assert!(matches!(
        mgr.save_session(None, None, true),
        Err(SessionError::ReadOnly)
    ));

    // The armed debounce disarms without writing anything
    let deadline = after_debounce(&SessionSettings::default());
    assert!(!mgr.tick(deadline).unwrap());
    assert!(mgr.get_sessions().is_empty());
}

#[test]
fn test_restore_session_replaces_tracked_state() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://old.example", "Old")]));

    let session = SessionInformation {
        path: "work".to_string(),
        title: "Work".to_string(),
        windows: vec![
            main_window(vec![tab("https://a.example", "A")]),
            main_window(vec![tab("https://b.example", "B")]),
        ],
        index: 1,
        is_clean: true,
    };

    mgr.restore_session(&session, false).unwrap();
    assert_eq!(mgr.main_windows().len(), 2);
    assert_eq!(mgr.active_window(), 1);
    assert_eq!(mgr.current_session(), "work");
    assert!(!mgr.has_pending_save());
}

#[test]
fn test_restore_private_keeps_session_name() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    let session = SessionInformation {
        path: "work".to_string(),
        windows: vec![main_window(vec![tab("https://a.example", "A")])],
        index: 0,
        ..SessionInformation::default()
    };

    mgr.restore_session(&session, true).unwrap();
    assert_eq!(mgr.current_session(), "default");
    assert_eq!(mgr.main_windows().len(), 1);
}

#[test]
fn test_privately_restored_windows_are_never_persisted() {
    let dir = TempDir::new().unwrap();
    let settings = SessionSettings::default();
    let mut mgr = manager(&dir);

    let session = SessionInformation {
        path: "secret".to_string(),
        windows: vec![main_window(vec![tab(
            "https://private.example/secret",
            "Secret",
        )])],
        index: 0,
        ..SessionInformation::default()
    };

    mgr.restore_session(&session, true).unwrap();
    assert!(mgr.has_private_windows());

    // Neither the debounced save nor an explicit one writes the private state
    mgr.mark_session_modified();
    assert!(!mgr.tick(after_debounce(&settings)).unwrap());
    assert!(matches!(
        mgr.save_session(None, None, true),
        Err(SessionError::ReadOnly)
    ));
    assert!(matches!(
        mgr.get_session("default"),
        Err(SessionError::NotFound(_))
    ));
    assert!(mgr.get_sessions().is_empty());
}

#[test]
fn test_non_private_restore_lifts_private_flag() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    let private = SessionInformation {
        windows: vec![main_window(vec![tab("https://private.example", "P")])],
        index: 0,
        ..SessionInformation::default()
    };
    mgr.restore_session(&private, true).unwrap();
    assert!(mgr.has_private_windows());

    let normal = SessionInformation {
        path: "work".to_string(),
        windows: vec![main_window(vec![tab("https://work.example", "Work")])],
        index: 0,
        ..SessionInformation::default()
    };
    mgr.restore_session(&normal, false).unwrap();
    assert!(!mgr.has_private_windows());

    mgr.save_session(None, None, true).unwrap();
    let saved = mgr.get_session("work").unwrap();
    assert_eq!(saved.windows[0].windows[0].url(), "https://work.example");
}

#[test]
fn test_closing_all_private_windows_lifts_private_flag() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    let private = SessionInformation {
        windows: vec![main_window(vec![tab("https://private.example", "P")])],
        index: 0,
        ..SessionInformation::default()
    };
    mgr.restore_session(&private, true).unwrap();

    mgr.remove_main_window(0).unwrap();
    assert!(!mgr.has_private_windows());
}

#[test]
fn test_restore_rejects_malformed_sessions() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    // No windows at all
    let empty = SessionInformation::default();
    assert!(matches!(
        mgr.restore_session(&empty, false),
        Err(SessionError::MalformedSession(_))
    ));

    // Active-tab index past the end
    let mut bad_tab_index = SessionInformation {
        windows: vec![main_window(vec![tab("https://a.example", "A")])],
        index: 0,
        ..SessionInformation::default()
    };
    bad_tab_index.windows[0].index = 5;
    assert!(matches!(
        mgr.restore_session(&bad_tab_index, false),
        Err(SessionError::MalformedSession(_))
    ));

    // History index past the end of the entry list
    let mut bad_history = SessionInformation {
        windows: vec![main_window(vec![tab("https://a.example", "A")])],
        index: 0,
        ..SessionInformation::default()
    };
    bad_history.windows[0].windows[0].history_index = 9;
    assert!(matches!(
        mgr.restore_session(&bad_history, false),
        Err(SessionError::MalformedSession(_))
    ));
}

#[test]
fn test_delete_session() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://example.com", "Example")]));
    mgr.save_session(Some("work"), None, true).unwrap();
    assert_eq!(mgr.get_sessions(), vec!["work"]);

    mgr.delete_session("work").unwrap();
    assert!(mgr.get_sessions().is_empty());
    assert!(matches!(
        mgr.delete_session("work"),
        Err(SessionError::NotFound(_))
    ));
}

#[test]
fn test_has_url_scans_current_urls() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://a.example", "A")]));
    mgr.register_main_window(main_window(vec![
        tab("https://b.example", "B"),
        tab("https://c.example", "C"),
    ]));

    assert!(mgr.has_url("https://c.example", false));
    assert!(!mgr.has_url("https://missing.example", false));

    // Only the entry at the current history index counts
    assert!(mgr.has_url("https://a.example", false));
}

#[test]
fn test_has_url_activate_focuses_match() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://a.example", "A")]));
    mgr.register_main_window(main_window(vec![
        tab("https://b.example", "B"),
        tab("https://c.example", "C"),
    ]));
    assert_eq!(mgr.active_window(), 0);

    assert!(mgr.has_url("https://c.example", true));
    assert_eq!(mgr.active_window(), 1);
    assert_eq!(mgr.main_windows()[1].index, 1);
}

#[test]
fn test_debounce_coalesces_mutations_into_one_save() {
    let dir = TempDir::new().unwrap();
    let settings = SessionSettings::default();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://example.com", "Example")]));

    // A burst of mutations within the quiet period
    for _ in 0..10 {
        mgr.mark_session_modified();
    }
    assert!(mgr.is_dirty());
    assert!(mgr.has_pending_save());

    // Before the deadline nothing happens
    assert!(!mgr.tick(Instant::now()).unwrap());
    assert!(mgr.has_pending_save());

    // After the deadline exactly one save runs
    let deadline = after_debounce(&settings);
    assert!(mgr.tick(deadline).unwrap());
    assert!(!mgr.is_dirty());
    assert!(!mgr.has_pending_save());

    // A further tick with no new mutations saves nothing
    assert!(!mgr.tick(deadline).unwrap());

    let saved = mgr.get_session("default").unwrap();
    assert!(!saved.is_clean);
}

#[test]
fn test_explicit_save_disarms_pending_debounce() {
    let dir = TempDir::new().unwrap();
    let settings = SessionSettings::default();
    let mut mgr = manager(&dir);

    mgr.register_main_window(main_window(vec![tab("https://example.com", "Example")]));
    mgr.mark_session_modified();
    assert!(mgr.has_pending_save());

    mgr.save_session(None, None, true).unwrap();
    assert!(!mgr.has_pending_save());
    assert!(!mgr.tick(after_debounce(&settings)).unwrap());
}

#[test]
fn test_register_and_remove_main_windows() {
    let dir = TempDir::new().unwrap();
    let mut mgr = manager(&dir);

    let first = mgr.register_main_window(main_window(vec![tab("https://a.example", "A")]));
    let second = mgr.register_main_window(main_window(vec![tab("https://b.example", "B")]));
    assert_eq!((first, second), (0, 1));
    assert_eq!(mgr.active_window(), 0);

    let removed = mgr.remove_main_window(0).unwrap();
    assert_eq!(removed.windows[0].url(), "https://a.example");
    assert_eq!(mgr.main_windows().len(), 1);
    assert_eq!(mgr.active_window(), 0);

    mgr.remove_main_window(0).unwrap();
    assert_eq!(mgr.active_window(), -1);
    assert!(mgr.remove_main_window(0).is_none());
}

#[test]
fn test_get_session_path_resolves_under_profile() {
    let dir = TempDir::new().unwrap();
    let mgr = manager(&dir);

    assert_eq!(
        mgr.get_session_path("work"),
        dir.path().join("sessions").join("work.json")
    );
}
