//! Pointer-drag math for repositioning windows.
//!
//! Position is ephemeral visual state: it lives in a signal for the page's
//! lifetime and is lost on reload. Nothing here prevents overlap or solves
//! layout; the only stacking rule is "the dragged window sits on top while
//! the gesture lasts", which the view applies via a z-index class.

/// Translation offset of a window from its normal flow position, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowPos {
    pub x: f64,
    pub y: f64,
}

/// An in-progress drag: the pointer-to-offset delta captured on
/// pointer-down, so the window tracks the cursor without jumping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    grab_dx: f64,
    grab_dy: f64,
}

impl DragGesture {
    /// Start a gesture from the pointer position and the window's current
    /// offset.
    pub fn begin(pointer_x: f64, pointer_y: f64, origin: WindowPos) -> Self {
        Self {
            grab_dx: pointer_x - origin.x,
            grab_dy: pointer_y - origin.y,
        }
    }

    /// Offset the window should have while the pointer is at (x, y).
    pub fn position_during(&self, pointer_x: f64, pointer_y: f64) -> WindowPos {
        WindowPos {
            x: pointer_x - self.grab_dx,
            y: pointer_y - self.grab_dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_does_not_jump_on_grab() {
        let origin = WindowPos { x: 40.0, y: 25.0 };
        let gesture = DragGesture::begin(100.0, 80.0, origin);
        // Pointer hasn't moved yet: the offset must be unchanged.
        assert_eq!(gesture.position_during(100.0, 80.0), origin);
    }

    #[test]
    fn test_offset_follows_pointer_delta() {
        let gesture = DragGesture::begin(100.0, 80.0, WindowPos::default());
        let pos = gesture.position_during(130.0, 60.0);
        assert_eq!(pos, WindowPos { x: 30.0, y: -20.0 });
    }

    #[test]
    fn test_grab_offset_is_invariant_over_the_gesture() {
        let origin = WindowPos { x: -12.0, y: 7.5 };
        let gesture = DragGesture::begin(10.0, 10.0, origin);
        for (px, py) in [(10.0, 10.0), (0.0, 0.0), (250.0, 480.0), (-5.0, 3.0)] {
            let pos = gesture.position_during(px, py);
            // pointer − position stays equal to the original grab delta
            assert_eq!(px - pos.x, 10.0 - origin.x);
            assert_eq!(py - pos.y, 10.0 - origin.y);
        }
    }
}
