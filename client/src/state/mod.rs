//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `console` holds the domain state the pages render from; `toast` holds the
//! transient notification chrome so it can change without touching the
//! console flows.

pub mod console;
pub mod toast;
