//! The desktop window state machine.
//!
//! Each window is tracked independently as a single `WindowPhase` enum, so
//! the "minimized and maximized at the same time" combination is impossible
//! by construction rather than by handler discipline. Transitions are pure
//! functions, unit-testable without any rendering.

use std::collections::HashMap;

/// Lifecycle phase of one window. `Closed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPhase {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Closed,
}

impl WindowPhase {
    /// Whether the content body should be rendered (title bar still shows
    /// for `Minimized`; nothing at all shows for `Closed`).
    pub fn shows_body(self) -> bool {
        matches!(self, WindowPhase::Normal | WindowPhase::Maximized)
    }

    /// Whether the window may be repositioned by dragging its title bar.
    pub fn draggable(self) -> bool {
        matches!(self, WindowPhase::Normal | WindowPhase::Minimized)
    }
}

/// Events dispatched by a window's title-bar controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    ToggleMinimize,
    ToggleMaximize,
    Close,
}

/// Pure transition function over the 4-state space. Total: every
/// (phase, event) pair maps to a phase, and no event leaves `Closed`.
pub fn transition(phase: WindowPhase, event: WindowEvent) -> WindowPhase {
    use WindowEvent::*;
    use WindowPhase::*;
    match (phase, event) {
        (Closed, _) => Closed,
        (_, Close) => Closed,
        (Minimized, ToggleMinimize) => Normal,
        (_, ToggleMinimize) => Minimized,
        (Maximized, ToggleMaximize) => Normal,
        (_, ToggleMaximize) => Maximized,
    }
}

/// Mapping from window id to phase for every window on a page.
///
/// Ids are assigned at composition time and never destroyed. An id with no
/// entry is implicitly `Normal`; the accessor makes that explicit so
/// "never touched" and "default" cannot be told apart downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowRegistry {
    phases: HashMap<&'static str, WindowPhase>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of `id`, defaulting to `Normal` for untouched windows.
    pub fn phase(&self, id: &str) -> WindowPhase {
        self.phases.get(id).copied().unwrap_or_default()
    }

    /// Dispatch a title-bar event for `id` through the transition function.
    pub fn apply(&mut self, id: &'static str, event: WindowEvent) {
        let next = transition(self.phase(id), event);
        self.phases.insert(id, next);
    }

    /// Ids from `ids` that are currently minimized, in the given order.
    /// Closed windows never appear (they are terminal, not parked).
    pub fn minimized<'a>(&self, ids: &'a [(&'static str, &'static str)]) -> Vec<(&'static str, &'a str)> {
        ids.iter()
            .filter(|(id, _)| self.phase(id) == WindowPhase::Minimized)
            .map(|&(id, title)| (id, title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WindowEvent::*;
    use WindowPhase::*;

    #[test]
    fn test_minimize_toggles_from_normal() {
        assert_eq!(transition(Normal, ToggleMinimize), Minimized);
        assert_eq!(transition(Minimized, ToggleMinimize), Normal);
    }

    #[test]
    fn test_maximize_toggles_from_normal() {
        assert_eq!(transition(Normal, ToggleMaximize), Maximized);
        assert_eq!(transition(Maximized, ToggleMaximize), Normal);
    }

    #[test]
    fn test_minimize_from_maximized_clears_maximize() {
        // Single-enum representation: moving to Minimized is sufficient,
        // there is no second flag left to clear.
        assert_eq!(transition(Maximized, ToggleMinimize), Minimized);
    }

    #[test]
    fn test_maximize_from_minimized() {
        assert_eq!(transition(Minimized, ToggleMaximize), Maximized);
    }

    #[test]
    fn test_close_from_every_live_state() {
        for phase in [Normal, Minimized, Maximized] {
            assert_eq!(transition(phase, Close), Closed);
        }
    }

    #[test]
    fn test_closed_is_terminal() {
        for event in [ToggleMinimize, ToggleMaximize, Close] {
            assert_eq!(transition(Closed, event), Closed);
        }
    }

    #[test]
    fn test_untouched_id_defaults_to_normal() {
        let registry = WindowRegistry::new();
        assert_eq!(registry.phase("letter"), Normal);
    }

    #[test]
    fn test_apply_on_unknown_id_starts_from_normal() {
        let mut registry = WindowRegistry::new();
        registry.apply("playlist", ToggleMinimize);
        assert_eq!(registry.phase("playlist"), Minimized);
    }

    #[test]
    fn test_maximize_then_minimize_counter_window() {
        let mut registry = WindowRegistry::new();
        registry.apply("counter", ToggleMaximize);
        registry.apply("counter", ToggleMinimize);
        // In flag terms: minimized=true, maximized=false, closed=false.
        assert_eq!(registry.phase("counter"), Minimized);
    }

    #[test]
    fn test_windows_are_independent() {
        let mut registry = WindowRegistry::new();
        registry.apply("letter", Close);
        registry.apply("gallery", ToggleMaximize);
        assert_eq!(registry.phase("letter"), Closed);
        assert_eq!(registry.phase("gallery"), Maximized);
        assert_eq!(registry.phase("counter"), Normal);
    }

    #[test]
    fn test_minimized_listing_skips_closed() {
        let ids = [("counter", "Counter"), ("letter", "Letter"), ("gallery", "Gallery")];
        let mut registry = WindowRegistry::new();
        registry.apply("counter", ToggleMinimize);
        registry.apply("letter", Close);
        registry.apply("gallery", ToggleMinimize);
        let minimized = registry.minimized(&ids);
        assert_eq!(minimized, vec![("counter", "Counter"), ("gallery", "Gallery")]);
    }

    #[test]
    fn test_rendering_contract_flags() {
        assert!(Normal.shows_body());
        assert!(Maximized.shows_body());
        assert!(!Minimized.shows_body());
        assert!(!Closed.shows_body());
        assert!(Normal.draggable());
        assert!(Minimized.draggable());
        assert!(!Maximized.draggable());
        assert!(!Closed.draggable());
    }
}
