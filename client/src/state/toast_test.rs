use super::*;

const SHORT: Duration = Duration::from_millis(300);
const STEP: Duration = Duration::from_millis(100);

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 0);
    assert_eq!(state.progress(), 0.0);
}

#[test]
fn show_replaces_previous_toast() {
    let mut state = ToastState::default();
    state.show(Toast::success("first", ""), SHORT);
    let seq = state.show(Toast::error("second", "boom"), SHORT);
    assert_eq!(seq, 2);
    assert_eq!(state.current, Some(Toast::error("second", "boom")));
}

#[test]
fn stale_dismiss_does_not_hide_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(Toast::success("first", ""), SHORT);
    state.show(Toast::success("second", ""), SHORT);
    assert!(!state.dismiss(first));
    assert_eq!(state.current.as_ref().map(|t| t.title.as_str()), Some("second"));
}

#[test]
fn dismiss_current_hides_it_once() {
    let mut state = ToastState::default();
    let seq = state.show(Toast::error("oops", ""), SHORT);
    assert!(state.dismiss(seq));
    assert!(state.current.is_none());
    assert!(!state.dismiss(seq));
}

#[test]
fn level_maps_to_css_modifier() {
    assert_eq!(ToastLevel::Success.css_class(), "toast toast--success");
    assert_eq!(ToastLevel::Error.css_class(), "toast toast--error");
}

// =============================================================
// Countdown
// =============================================================

#[test]
fn ticks_count_down_and_hide_at_zero() {
    let mut state = ToastState::default();
    let seq = state.show(Toast::success("saved", ""), SHORT);
    assert_eq!(state.progress(), 1.0);

    assert!(state.tick(seq, STEP));
    assert!(state.tick(seq, STEP));
    assert_eq!(state.remaining, STEP);
    assert!(state.current.is_some());

    assert!(!state.tick(seq, STEP));
    assert!(state.current.is_none());
    assert_eq!(state.progress(), 0.0);
}

#[test]
fn paused_toast_keeps_its_remaining_time() {
    let mut state = ToastState::default();
    let seq = state.show(Toast::success("saved", ""), SHORT);
    state.tick(seq, STEP);

    assert!(state.pause(seq));
    for _ in 0..10 {
        assert!(state.tick(seq, STEP));
    }
    assert_eq!(state.remaining, SHORT - STEP);
    assert!(state.current.is_some());

    assert!(state.resume(seq));
    state.tick(seq, STEP);
    assert_eq!(state.remaining, STEP);
}

#[test]
fn stale_tick_and_hover_leave_newer_toast_alone() {
    let mut state = ToastState::default();
    let first = state.show(Toast::success("first", ""), SHORT);
    let second = state.show(Toast::success("second", ""), SHORT);

    assert!(!state.tick(first, SHORT));
    assert!(!state.pause(first));
    assert!(!state.paused);
    assert_eq!(state.remaining, SHORT);
    assert!(state.tick(second, STEP));
}

#[test]
fn new_toast_clears_pause() {
    let mut state = ToastState::default();
    let first = state.show(Toast::success("first", ""), SHORT);
    state.pause(first);
    state.show(Toast::error("second", ""), SHORT);
    assert!(!state.paused);
}

#[test]
fn progress_tracks_fraction_left() {
    let mut state = ToastState::default();
    let seq = state.show(Toast::success("saved", ""), Duration::from_millis(400));
    state.tick(seq, STEP);
    assert!((state.progress() - 0.75).abs() < 1e-9);
}
