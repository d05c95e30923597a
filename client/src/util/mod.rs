//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, toast
//! timers) from controller and page logic to improve reuse and testability.

pub mod notify;
pub mod session_store;
