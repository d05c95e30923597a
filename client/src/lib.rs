//! # client
//!
//! Leptos + WASM frontend for the product admin console.
//!
//! This crate contains the login/catalog pages, the session & catalog
//! controller, the admin API clients, and the browser glue (cookies, toasts).
//! The server crate renders [`app::App`] through SSR; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
