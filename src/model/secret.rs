//! The hidden-message easter egg behind the hero heart.

/// How many heart taps reveal the hidden message.
pub const UNLOCK_THRESHOLD: u32 = 3;

/// Click-counter state for the secret reveal.
///
/// `unlocked` latches on the tap that first reaches the threshold and never
/// resets within a session. `visible` is set alongside it on that one tap
/// only, so dismissing the modal is final: further taps keep incrementing
/// the counter but cannot re-open the reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecretUnlock {
    pub clicks: u32,
    pub unlocked: bool,
    pub visible: bool,
}

impl SecretUnlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one tap on the trigger. Returns `true` on the tap that
    /// crosses the threshold, so callers can fire one-time side effects
    /// (analytics, haptics) exactly once.
    pub fn record_click(&mut self) -> bool {
        self.clicks += 1;
        if self.clicks >= UNLOCK_THRESHOLD && !self.unlocked {
            self.unlocked = true;
            self.visible = true;
            return true;
        }
        false
    }

    /// Hide the modal. `unlocked` and `clicks` are untouched.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
