//! End-to-end scenarios across the model modules, exercised the way the
//! pages drive them: counter tick, secret reveal, and a full desktop
//! session with drags and title-bar events.

use super::*;

#[test]
fn test_counter_five_seconds_after_epoch() {
    // 2024-12-29T16:02:00 UTC in ms; "now" is five seconds later.
    let epoch_ms = 1_735_488_120_000.0;
    let d = elapsed_between(epoch_ms, epoch_ms + 5_000.0);
    assert_eq!(d.days, 0);
    assert_eq!(d.hours, 0);
    assert_eq!(d.minutes, 0);
    assert_eq!(d.seconds, 5);
}

#[test]
fn test_secret_reveal_then_dismiss() {
    let mut secret = SecretUnlock::new();
    // Tap the heart three times: modal appears on the third tap.
    secret.record_click();
    secret.record_click();
    assert!(!secret.visible);
    secret.record_click();
    assert!(secret.visible);
    // Close control: hidden, but the unlock and the count survive.
    secret.dismiss();
    assert!(!secret.visible);
    assert!(secret.unlocked);
    assert_eq!(secret.clicks, 3);
}

#[test]
fn test_desktop_session() {
    const WINDOWS: &[(&str, &str)] = &[
        ("counter", "Our Days"),
        ("letter", "A Note"),
        ("playlist", "Our Songs"),
        ("gallery", "Memories"),
    ];

    let mut registry = WindowRegistry::new();

    // Maximize the counter window, then minimize it from there.
    registry.apply("counter", WindowEvent::ToggleMaximize);
    assert_eq!(registry.phase("counter"), WindowPhase::Maximized);
    registry.apply("counter", WindowEvent::ToggleMinimize);
    assert_eq!(registry.phase("counter"), WindowPhase::Minimized);

    // The letter gets closed for good; the playlist is never touched.
    registry.apply("letter", WindowEvent::Close);
    registry.apply("letter", WindowEvent::ToggleMaximize);
    assert_eq!(registry.phase("letter"), WindowPhase::Closed);
    assert_eq!(registry.phase("playlist"), WindowPhase::Normal);

    // The taskbar shows only the parked counter window.
    assert_eq!(registry.minimized(WINDOWS), vec![("counter", "Our Days")]);

    // Restoring from the taskbar is just another minimize toggle.
    registry.apply("counter", WindowEvent::ToggleMinimize);
    assert_eq!(registry.phase("counter"), WindowPhase::Normal);
    assert!(registry.minimized(WINDOWS).is_empty());
}

#[test]
fn test_drag_respects_phase() {
    let mut registry = WindowRegistry::new();
    registry.apply("gallery", WindowEvent::ToggleMaximize);
    // A maximized window refuses gestures; restoring it re-enables them.
    assert!(!registry.phase("gallery").draggable());
    registry.apply("gallery", WindowEvent::ToggleMaximize);
    assert!(registry.phase("gallery").draggable());

    // Dragging a normal window from rest to (30, 40).
    let start = WindowPos::default();
    let gesture = DragGesture::begin(200.0, 150.0, start);
    let dropped = gesture.position_during(230.0, 190.0);
    assert_eq!(dropped, WindowPos { x: 30.0, y: 40.0 });
}
