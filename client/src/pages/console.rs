//! Console page: switches between the login and catalog views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated flag is the only thing deciding which tree renders.
//! There is no route guard and no redirect; logging out simply flips back to
//! the login form.

use leptos::prelude::*;

use super::catalog::CatalogView;
use super::login::LoginView;
use crate::components::toast_host::ToastHost;
use crate::state::console::ConsoleState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();

    view! {
        <Show when=move || console.with(|s| s.authenticated) fallback=|| view! { <LoginView/> }>
            <CatalogView/>
        </Show>
        <ToastHost/>
    }
}
