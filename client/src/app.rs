//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::console::ConsolePage;
use crate::state::console::ConsoleState;
use crate::state::toast::ToastState;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the console and toast state contexts. The console is a single
/// screen, so the router only carries one route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let console = RwSignal::new(ConsoleState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(console);
    provide_context(toasts);

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Product Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
