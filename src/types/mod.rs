// Skiff shared type definitions
// Each submodule defines types used across the session subsystem.

pub mod errors;
pub mod events;
pub mod hints;
pub mod session;
pub mod settings;
