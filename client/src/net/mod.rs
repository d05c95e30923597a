//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the client trait and its browser/native implementations,
//! `error` the shared failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod types;
