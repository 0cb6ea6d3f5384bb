use web_sys::window;

/// Short haptic tick for the secret-heart taps (if the device supports it)
pub fn vibrate_tick() {
    if let Some(window) = window() {
        let _ = window.navigator().vibrate_with_duration(10);
    }
}
