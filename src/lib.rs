//! Skiff — a lightweight desktop web browser.
//!
//! This crate is the session persistence core: the data model for windows,
//! tabs and navigation history, the sessions manager with its undo-close
//! stack and debounced saving, and the on-disk session store. The GUI shell
//! consumes these modules and supplies profile paths and settings.

pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
