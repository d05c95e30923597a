//! Reusable UI components for the console pages.
//!
//! DESIGN
//! ======
//! Components read shared state from context and report user intent through
//! callbacks; pages decide what those intents do.

pub mod product_detail;
pub mod product_table;
pub mod toast_host;
