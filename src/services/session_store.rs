// Skiff session store
// Persists sessions as JSON files addressed by path under the profile's
// sessions directory. One file per session; the file stem is the session name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::SessionError;
use crate::types::session::SessionInformation;

/// Trait defining the on-disk session store interface.
pub trait SessionStoreTrait {
    fn save(&self, session: &SessionInformation) -> Result<(), SessionError>;
    fn load(&self, name: &str) -> Result<SessionInformation, SessionError>;
    fn delete(&self, name: &str) -> Result<(), SessionError>;
    fn list(&self) -> Vec<String>;
    fn exists(&self, name: &str) -> bool;
}

/// Session store rooted at a profile directory.
pub struct SessionStore {
    sessions_dir: PathBuf,
}

impl SessionStore {
    /// Creates a store addressing `<profile>/sessions/`.
    pub fn new(profile_path: &Path) -> Self {
        Self {
            sessions_dir: profile_path.join("sessions"),
        }
    }

    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    /// Resolves a session name or relative path to its file path.
    ///
    /// The extension is normalized to `.json` (replacing any other) so
    /// every saved session is listable; relative names land under the
    /// sessions directory, absolute paths are used as-is.
    pub fn session_path(&self, name: &str) -> PathBuf {
        let mut file = PathBuf::from(name);
        file.set_extension("json");

        if file.is_absolute() {
            file
        } else {
            self.sessions_dir.join(file)
        }
    }
}

impl SessionStoreTrait for SessionStore {
    /// Writes the session as pretty-printed JSON at its addressed path,
    /// creating the sessions directory on first use.
    fn save(&self, session: &SessionInformation) -> Result<(), SessionError> {
        let path = self.session_path(&session.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::SerializationError(e.to_string()))?;

        fs::write(&path, json).map_err(|e| SessionError::IoError(e.to_string()))
    }

    /// Loads a persisted session and stamps it with its store address.
    fn load(&self, name: &str) -> Result<SessionInformation, SessionError> {
        let path = self.session_path(name);

        if !path.exists() {
            return Err(SessionError::NotFound(name.to_string()));
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| SessionError::IoError(e.to_string()))?;

        let mut session: SessionInformation = serde_json::from_str(&contents)
            .map_err(|e| SessionError::SerializationError(e.to_string()))?;
        session.path = name.to_string();

        Ok(session)
    }

    fn delete(&self, name: &str) -> Result<(), SessionError> {
        let path = self.session_path(name);

        if !path.exists() {
            return Err(SessionError::NotFound(name.to_string()));
        }

        fs::remove_file(&path).map_err(|e| SessionError::IoError(e.to_string()))
    }

    /// Lists the names of all persisted sessions, sorted.
    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&self.sessions_dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
                .filter_map(|entry| {
                    entry
                        .path()
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().to_string())
                })
                .collect(),
            Err(_) => Vec::new(),
        };

        names.sort();
        names
    }

    fn exists(&self, name: &str) -> bool {
        self.session_path(name).exists()
    }
}
