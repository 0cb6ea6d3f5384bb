mod drag;
mod elapsed;
mod secret;
mod windows;
#[cfg(test)]
mod scenario_tests;

pub use drag::{DragGesture, WindowPos};
pub use elapsed::{
    breakdown, elapsed_between, ElapsedDuration, EPOCH_ISO, MS_PER_DAY, MS_PER_HOUR,
    MS_PER_MINUTE, MS_PER_SECOND,
};
pub use secret::{SecretUnlock, UNLOCK_THRESHOLD};
pub use windows::{transition, WindowEvent, WindowPhase, WindowRegistry};
