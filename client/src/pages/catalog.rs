//! Authenticated view: session actions, product table, and detail pane.

use leptos::prelude::*;

use crate::components::product_detail::ProductDetailPane;
use crate::components::product_table::ProductTable;
use crate::state::console::ConsoleState;
use crate::state::toast::ToastState;

#[component]
pub fn CatalogView() -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_check = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let controller = crate::controller::browser_controller(console, toasts);
            leptos::task::spawn_local(async move {
                controller.check_session().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (console, toasts);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        crate::controller::browser_controller(console, toasts).logout();
        #[cfg(not(feature = "hydrate"))]
        let _ = (console, toasts);
    };

    let on_select = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        crate::controller::browser_controller(console, toasts).select_product(Some(&id));
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, console, toasts);
    });

    let on_close = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        crate::controller::browser_controller(console, toasts).select_product(None);
        #[cfg(not(feature = "hydrate"))]
        let _ = (console, toasts);
    });

    view! {
        <div class="container">
            <div class="row my-3">
                <div class="col">
                    <button type="button" class="btn btn-success" on:click=on_check>
                        "Verify session"
                    </button>
                    <button type="button" class="btn btn-primary ms-3" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </div>
            <div class="row row-cols-2 my-5">
                <div class="col">
                    <h1 class="h2 mb-3">"Products"</h1>
                    <ProductTable on_select=on_select/>
                </div>
                <div class="col">
                    <h1 class="h2 mb-3">"Product details"</h1>
                    <ProductDetailPane on_close=on_close/>
                </div>
            </div>
        </div>
    }
}
