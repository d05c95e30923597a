//! Login view: email + password form posting to the signin endpoint.

use leptos::prelude::*;

use crate::net::types::CredentialField;
use crate::state::console::ConsoleState;
use crate::state::toast::ToastState;

#[component]
pub fn LoginView() -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_field = move |field: CredentialField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            #[cfg(feature = "hydrate")]
            crate::controller::browser_controller(console, toasts).update_credential_field(field, value);
            #[cfg(not(feature = "hydrate"))]
            let _ = (field, value);
        }
    };

    // Browser-native constraints (`required`, `type="email"`) gate the submit event.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = console.with_untracked(|s| s.credentials.clone());
        #[cfg(feature = "hydrate")]
        {
            let controller = crate::controller::browser_controller(console, toasts);
            leptos::task::spawn_local(async move {
                controller.submit_login(credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, toasts);
    };

    view! {
        <div class="login m-auto my-5 p-5">
            <h1 class="h2 text-center mb-3">"Please sign in"</h1>
            <form on:submit=on_submit>
                <div class="form-floating mb-3">
                    <input
                        type="email"
                        class="form-control"
                        id=CredentialField::Username.input_id()
                        placeholder="name@example.com"
                        required=true
                        prop:value=move || console.with(|s| s.credentials.username.clone())
                        on:input=on_field(CredentialField::Username)
                    />
                    <label for=CredentialField::Username.input_id()>"Email address"</label>
                </div>
                <div class="form-floating mb-3">
                    <input
                        type="password"
                        class="form-control"
                        id=CredentialField::Password.input_id()
                        placeholder="Password"
                        required=true
                        prop:value=move || console.with(|s| s.credentials.password.clone())
                        on:input=on_field(CredentialField::Password)
                    />
                    <label for=CredentialField::Password.input_id()>"Password"</label>
                </div>
                <button type="submit" class="btn btn-lg btn-primary w-100">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
