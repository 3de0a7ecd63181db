use std::fmt;

// === SessionError ===

/// Errors related to session persistence and the undo-close stack.
#[derive(Debug)]
pub enum SessionError {
    /// The manager is read-only (or private); mutating operations are refused.
    ReadOnly,
    /// No persisted session exists at the given path.
    NotFound(String),
    /// The given closed-window or session index is out of range.
    InvalidIndex(i32),
    /// The session data fails validation and cannot be restored.
    MalformedSession(String),
    /// Serializing or parsing session data failed.
    SerializationError(String),
    /// Reading or writing a session file failed.
    IoError(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::ReadOnly => write!(f, "Sessions manager is read-only"),
            SessionError::NotFound(path) => write!(f, "Session not found: {}", path),
            SessionError::InvalidIndex(index) => write!(f, "Invalid session index: {}", index),
            SessionError::MalformedSession(msg) => write!(f, "Malformed session: {}", msg),
            SessionError::SerializationError(msg) => {
                write!(f, "Session serialization failed: {}", msg)
            }
            SessionError::IoError(msg) => write!(f, "Session I/O failed: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}
