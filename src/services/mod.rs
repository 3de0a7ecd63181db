// Skiff persistence services
// Services own on-disk state; managers drive them from the UI event loop.

pub mod session_store;
