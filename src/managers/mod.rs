// Skiff state managers
// Managers hold the in-memory state mutated by UI events.

pub mod sessions_manager;
