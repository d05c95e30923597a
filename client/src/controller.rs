//! Session & catalog controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns every console flow: session check, catalog fetch, credential edits,
//! login, product selection, and logout. Pages call into it from event
//! handlers; it talks to the outside world only through injected seams:
//!
//! - [`AdminApi`] for HTTP (token passed per call)
//! - [`SessionStore`] for the `apiToken` cookie
//! - [`Notifier`] for toasts
//! - [`ConsoleStore`] for the rendered state
//!
//! ERROR HANDLING
//! ==============
//! No flow returns an error to its caller. Every failure is converted into an
//! error toast carrying [`ApiError::user_message`] and logged; the console
//! stays interactive. There is no retry.
//!
//! CONCURRENCY
//! ===========
//! Flows are independent futures on the single UI thread. Overlapping calls
//! are neither cancelled nor de-duplicated, so their state writes land in
//! response-arrival order.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::AdminApi;
use crate::net::error::ApiError;
use crate::net::types::{CredentialField, Credentials};
use crate::state::console::ConsoleStore;
use crate::state::toast::Toast;
use crate::util::notify::Notifier;
use crate::util::session_store::SessionStore;

pub const CHECK_OK_TITLE: &str = "Session verified";
pub const CHECK_FAILED_TITLE: &str = "Session check failed";
pub const CATALOG_FAILED_TITLE: &str = "Failed to load products";
pub const LOGIN_FAILED_TITLE: &str = "Sign-in failed";
pub const LOGIN_OK_FALLBACK_TITLE: &str = "Signed in";

pub struct ConsoleController<A, S, N, C> {
    api: A,
    session: S,
    notifier: N,
    state: C,
    logout_clears_token: bool,
}

impl<A, S, N, C> ConsoleController<A, S, N, C>
where
    A: AdminApi,
    S: SessionStore,
    N: Notifier,
    C: ConsoleStore,
{
    pub fn new(api: A, session: S, notifier: N, state: C) -> Self {
        Self { api, session, notifier, state, logout_clears_token: false }
    }

    /// Also drop the stored token on logout. Off by default: logout only
    /// leaves the authenticated view.
    #[must_use]
    pub fn with_logout_clears_token(mut self, enabled: bool) -> Self {
        self.logout_clears_token = enabled;
        self
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Ask the server whether the stored token is still valid.
    ///
    /// Advisory only: the authenticated flag is never changed here.
    pub async fn check_session(&self) -> bool {
        let result = match self.session.token() {
            Some(token) => self.api.check_session(&token).await,
            None => Err(ApiError::MissingToken),
        };
        match result {
            Ok(resp) => {
                log::info!("session check passed");
                self.notifier.notify(Toast::success(CHECK_OK_TITLE, format!("success: {}", resp.success)));
                true
            }
            Err(e) => {
                log::warn!("session check failed: {e}");
                self.notifier.notify(Toast::error(CHECK_FAILED_TITLE, e.user_message()));
                false
            }
        }
    }

    /// Fetch the catalog with the stored token.
    pub async fn fetch_catalog(&self) -> bool {
        match self.session.token() {
            Some(token) => self.fetch_catalog_with(&token).await,
            None => {
                self.state.update_state(|s| s.mark_catalog_requested());
                self.report_catalog_failure(&ApiError::MissingToken);
                false
            }
        }
    }

    async fn fetch_catalog_with(&self, token: &str) -> bool {
        self.state.update_state(|s| s.mark_catalog_requested());
        match self.api.list_products(token).await {
            Ok(products) => {
                log::info!("catalog loaded: {} products", products.len());
                self.state.update_state(|s| s.replace_products(products));
                true
            }
            Err(e) => {
                self.report_catalog_failure(&e);
                false
            }
        }
    }

    fn report_catalog_failure(&self, e: &ApiError) {
        log::warn!("catalog fetch failed: {e}");
        self.notifier.notify(Toast::error(CATALOG_FAILED_TITLE, e.user_message()));
    }

    pub fn update_credential_field(&self, field: CredentialField, value: impl Into<String>) {
        let value = value.into();
        self.state.update_state(|s| s.update_credential_field(field, value));
    }

    /// Exchange credentials for a token, enter the catalog view, and load it.
    pub async fn submit_login(&self, credentials: Credentials) -> bool {
        let resp = match self.api.sign_in(&credentials).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("sign-in failed: {e}");
                self.notifier.notify(Toast::error(LOGIN_FAILED_TITLE, e.user_message()));
                return false;
            }
        };

        self.session.set_token(&resp.token, resp.expired);
        let title = if resp.message.is_empty() { LOGIN_OK_FALLBACK_TITLE } else { resp.message.as_str() };
        self.notifier.notify(Toast::success(title, format!("Signed in as {}", credentials.username)));
        log::info!("signed in");
        self.state.update_state(|s| s.complete_login());

        self.fetch_catalog_with(&resp.token).await;
        true
    }

    /// Show `id` in the detail pane, or close the pane with `None`.
    pub fn select_product(&self, id: Option<&str>) -> bool {
        let mut found = false;
        self.state.update_state(|s| found = s.select_product(id));
        found
    }

    /// Return to the login view. No server call is made.
    pub fn logout(&self) {
        self.state.update_state(|s| s.logout());
        if self.logout_clears_token {
            self.session.clear_token();
        }
        log::info!("logged out");
    }
}

// =============================================================================
// BROWSER WIRING
// =============================================================================

/// Controller type used by the hydrated app.
#[cfg(feature = "hydrate")]
pub type BrowserController = ConsoleController<
    crate::net::api::GlooAdminApi,
    crate::util::session_store::DocumentCookieStore,
    crate::util::notify::SignalNotifier,
    leptos::prelude::RwSignal<crate::state::console::ConsoleState>,
>;

/// Assemble the browser controller around the app's state signals.
#[cfg(feature = "hydrate")]
pub fn browser_controller(
    state: leptos::prelude::RwSignal<crate::state::console::ConsoleState>,
    toasts: leptos::prelude::RwSignal<crate::state::toast::ToastState>,
) -> BrowserController {
    let config = crate::config::ConsoleConfig::from_build_env();
    ConsoleController::new(
        crate::net::api::GlooAdminApi::new(config.api),
        crate::util::session_store::DocumentCookieStore,
        crate::util::notify::SignalNotifier::new(toasts, config.toast_duration),
        state,
    )
    .with_logout_clears_token(config.logout_clears_token)
}
