use crate::model::{elapsed_between, ElapsedDuration, EPOCH_ISO};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::*;
use std::time::Duration;

/// The days/hours/minutes/seconds grid, recomputed once per second from the
/// fixed epoch. The interval handle is cleared on cleanup so a parked timer
/// never outlives the page that created it.
#[component]
pub fn CounterGrid() -> impl IntoView {
    let (elapsed, set_elapsed) = create_signal(ElapsedDuration::default());

    // Local-time epoch string resolved by the browser's Date parser.
    let epoch_ms = js_sys::Date::new(&EPOCH_ISO.into()).get_time();
    let tick = move || set_elapsed.set(elapsed_between(epoch_ms, js_sys::Date::now()));

    // First value immediately, then 1 Hz for the page's lifetime.
    tick();
    if let Ok(handle) = set_interval_with_handle(tick, Duration::from_millis(1000)) {
        on_cleanup(move || handle.clear());
    }

    let cards = move || {
        let e = elapsed.get();
        [
            ("📅", "Days", e.days),
            ("⏰", "Hours", e.hours),
            ("⏱️", "Minutes", e.minutes),
            ("⚡", "Seconds", e.seconds),
        ]
    };

    view! {
        <div class="counter-grid">
            {move || {
                cards()
                    .into_iter()
                    .map(|(icon, label, value)| {
                        view! {
                            <div class="counter-card">
                                <div class="counter-icon">{icon}</div>
                                <div class="counter-value">{value}</div>
                                <div class="counter-label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
