//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the console: Leptos SSR for the page itself, the
//! hydration bundle under `/pkg`, and a health probe. The admin API lives
//! elsewhere; the browser talks to it directly.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: Leptos SSR + static assets + health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();
    let pkg_path = site_root.join(&pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    leptos_router
        .nest_service(&format!("/{pkg_dir}"), ServeDir::new(pkg_path))
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on the Leptos site.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
