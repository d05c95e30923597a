//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Only one toast is visible at a time. A new toast replaces the current one
//! and bumps `seq`. Timer ticks and pointer events carry the `seq` they were
//! issued for, so a stale event cannot touch a newer toast.
//!
//! The countdown lives in the state itself (`remaining` out of `total`).
//! The browser drives it with [`ToastState::tick`]; hovering pauses it.

use std::time::Duration;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier used by the toast host.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub text: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { level: ToastLevel::Success, title: title.into(), text: text.into() }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { level: ToastLevel::Error, title: title.into(), text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub seq: u64,
    /// Countdown halted while the pointer is over the toast.
    pub paused: bool,
    pub remaining: Duration,
    pub total: Duration,
}

impl ToastState {
    /// Show `toast` for `duration`, superseding any visible one. Returns its
    /// sequence number.
    pub fn show(&mut self, toast: Toast, duration: Duration) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.paused = false;
        self.remaining = duration;
        self.total = duration;
        self.seq
    }

    fn is_showing(&self, seq: u64) -> bool {
        self.seq == seq && self.current.is_some()
    }

    /// Hide the toast shown as `seq`. No-op if a newer toast has replaced it.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.is_showing(seq) {
            self.current = None;
            self.paused = false;
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self, seq: u64) -> bool {
        let showing = self.is_showing(seq);
        if showing {
            self.paused = true;
        }
        showing
    }

    pub fn resume(&mut self, seq: u64) -> bool {
        let showing = self.is_showing(seq);
        if showing {
            self.paused = false;
        }
        showing
    }

    /// Advance the countdown of toast `seq` by `elapsed`, hiding it once the
    /// time runs out. Returns `false` when the timer driving `seq` should stop.
    pub fn tick(&mut self, seq: u64, elapsed: Duration) -> bool {
        if !self.is_showing(seq) {
            return false;
        }
        if self.paused {
            return true;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.dismiss(seq);
            return false;
        }
        true
    }

    /// Fraction of the countdown left, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.current.is_none() || self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}
