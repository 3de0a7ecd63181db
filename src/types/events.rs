/// Notifications emitted by the sessions manager.
///
/// UI collaborators (menus, toolbars) register listeners and refresh their
/// display when one of these arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The undo-close stack changed (push, restore, clear, or scrub).
    ClosedWindowsChanged,
    /// A url should be dropped from any collaborator-held stored state.
    RemoveStoredUrlRequested(String),
}
