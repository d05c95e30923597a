//! Toast overlay. Shows the current toast with a countdown bar; hovering
//! pauses the countdown and clicking dismisses early.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Countdown ticks must not rebuild the toast element under the pointer.
    let shown = Memo::new(move |_| toasts.with(|t| t.current.clone().map(|toast| (t.seq, toast))));

    move || {
        shown.get().map(|(seq, toast): (u64, Toast)| {
            view! {
                <div
                    class=toast.level.css_class()
                    role="status"
                    on:mouseenter=move |_| {
                        toasts.update(|t| {
                            t.pause(seq);
                        });
                    }
                    on:mouseleave=move |_| {
                        toasts.update(|t| {
                            t.resume(seq);
                        });
                    }
                    on:click=move |_| {
                        toasts.update(|t| {
                            t.dismiss(seq);
                        });
                    }
                >
                    <strong class="toast__title">{toast.title}</strong>
                    <p class="toast__text">{toast.text}</p>
                    <div
                        class="toast__progress"
                        style:width=move || format!("{:.1}%", toasts.with(ToastState::progress) * 100.0)
                    ></div>
                </div>
            }
        })
    }
}
