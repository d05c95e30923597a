use super::*;

const DURATION: Duration = Duration::from_millis(3000);

#[test]
fn notify_shows_toast_with_full_countdown() {
    let toasts = RwSignal::new(ToastState::default());
    let notifier = SignalNotifier::new(toasts, DURATION);

    notifier.notify(Toast::success("Signed in", "Signed in as a@b.com"));

    let state = toasts.get_untracked();
    assert_eq!(state.current, Some(Toast::success("Signed in", "Signed in as a@b.com")));
    assert_eq!(state.seq, 1);
    assert_eq!(state.remaining, DURATION);
    assert_eq!(state.total, DURATION);
}

#[test]
fn later_toast_supersedes_earlier_one() {
    let toasts = RwSignal::new(ToastState::default());
    let notifier = Rc::new(SignalNotifier::new(toasts, DURATION));

    notifier.notify(Toast::success("first", ""));
    notifier.notify(Toast::error("second", "boom"));

    let state = toasts.get_untracked();
    assert_eq!(state.current, Some(Toast::error("second", "boom")));
    assert_eq!(state.seq, 2);
}
