//! Notification sink injected into the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controller flows report outcomes through [`Notifier`] instead of a global
//! toast singleton. The app wires [`SignalNotifier`] to the toast host; tests
//! substitute a recorder.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Countdown resolution of the browser toast timer.
pub const TOAST_TICK: Duration = Duration::from_millis(100);

pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}

/// Pushes toasts into the shared [`ToastState`] signal and, in the browser,
/// runs their countdown.
#[derive(Clone, Copy, Debug)]
pub struct SignalNotifier {
    toasts: RwSignal<ToastState>,
    duration: Duration,
}

impl SignalNotifier {
    pub fn new(toasts: RwSignal<ToastState>, duration: Duration) -> Self {
        Self { toasts, duration }
    }
}

impl Notifier for SignalNotifier {
    #[cfg(not(feature = "hydrate"))]
    fn notify(&self, toast: Toast) {
        self.toasts.update(|t| {
            t.show(toast, self.duration);
        });
    }

    #[cfg(feature = "hydrate")]
    fn notify(&self, toast: Toast) {
        if let Some(seq) = self.toasts.try_update(|t| t.show(toast, self.duration)) {
            leptos::task::spawn_local(run_countdown(self.toasts, seq));
        }
    }
}

/// Tick toast `seq` until it runs out or stops being the visible toast.
#[cfg(feature = "hydrate")]
async fn run_countdown(toasts: RwSignal<ToastState>, seq: u64) {
    loop {
        gloo_timers::future::sleep(TOAST_TICK).await;
        let running = toasts.try_update(|t| t.tick(seq, TOAST_TICK)).unwrap_or(false);
        if !running {
            break;
        }
    }
}
