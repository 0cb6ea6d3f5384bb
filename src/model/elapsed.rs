//! Elapsed-time breakdown for the relationship counter.
//!
//! Works entirely in millisecond floats so the view layer can feed it
//! `js_sys::Date::now()` directly; nothing here touches the browser.

pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;
pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// The moment we count from, as an ISO-8601 local-time string.
/// Resolved to a millisecond timestamp via `js_sys::Date` in the view layer.
pub const EPOCH_ISO: &str = "2025-01-01T00:00:00";

/// Days/hours/minutes/seconds since the epoch.
///
/// "Days" is the flat `floor(diff / 86_400_000)` — no calendar month or
/// year awareness, matching how the counter has always displayed it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Decompose a millisecond difference into days/hours/minutes/seconds.
///
/// A negative `diff_ms` (system clock behind the epoch) is passed through
/// unguarded: the components come out negative or zero, never a panic.
pub fn breakdown(diff_ms: f64) -> ElapsedDuration {
    let days = (diff_ms / MS_PER_DAY).floor();
    let hours = ((diff_ms % MS_PER_DAY) / MS_PER_HOUR).trunc();
    let minutes = ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE).trunc();
    let seconds = ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND).trunc();
    ElapsedDuration {
        days: days as i64,
        hours: hours as i64,
        minutes: minutes as i64,
        seconds: seconds as i64,
    }
}

/// Breakdown of `now_ms - epoch_ms`.
pub fn elapsed_between(epoch_ms: f64, now_ms: f64) -> ElapsedDuration {
    breakdown(now_ms - epoch_ms)
}
