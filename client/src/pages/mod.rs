//! Page modules for the console screen.
//!
//! ARCHITECTURE
//! ============
//! `console` owns the login/catalog switch; `login` and `catalog` own their
//! event wiring and delegate rendering details to `components`.

pub mod catalog;
pub mod console;
pub mod login;
