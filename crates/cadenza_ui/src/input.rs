//! Pointer input snapshots and edge detection.
//!
//! The host supplies a [`PointerState`] snapshot each frame; interactive
//! components run it through a [`PointerTracker`] to turn the raw state into
//! singly-triggered transitions (enter/leave/down/up/click) plus the
//! continuous over/pressed signals.

/// Pointer state for the current frame, supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer X position in screen space.
    pub x: f32,
    /// Pointer Y position in screen space.
    pub y: f32,
    /// Whether the primary button is held this frame.
    pub pressed: bool,
}

impl PointerState {
    /// Creates a pointer snapshot.
    #[must_use]
    pub const fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }
}

/// Pointer transitions observed in one frame.
///
/// `entered`, `left`, `down`, `up`, and `clicked` fire once per state
/// transition; `over` and `pressed` fire every frame the condition holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerEvents {
    /// Pointer crossed into the component's bounds.
    pub entered: bool,
    /// Pointer crossed out of the component's bounds.
    pub left: bool,
    /// Pointer is over the component (continuous).
    pub over: bool,
    /// Button went down over the component.
    pub down: bool,
    /// Button remains held over the component (continuous).
    pub pressed: bool,
    /// Button was released over the component.
    pub up: bool,
    /// A press that began inside the component was released inside it.
    pub clicked: bool,
}

/// Edge-detection bookkeeping for one interactive component.
///
/// A press that began outside the component (the pointer entered with the
/// button already held) never produces `down` or `clicked`.
#[derive(Debug, Default)]
pub struct PointerTracker {
    over: bool,
    held: bool,
    pressed_on_enter: bool,
}

impl PointerTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was over the component as of the last frame.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether a press is currently held over the component.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Advances the tracker with this frame's pointer snapshot against the
    /// component's absolute bounds `(x, y, width, height)`.
    pub fn advance(&mut self, pointer: PointerState, bounds: (f32, f32, f32, f32)) -> PointerEvents {
        let (bx, by, bw, bh) = bounds;
        let inside = pointer.x >= bx && pointer.x < bx + bw && pointer.y >= by && pointer.y < by + bh;

        let mut events = PointerEvents::default();

        if inside {
            events.over = true;
            if !self.over {
                self.over = true;
                self.pressed_on_enter = pointer.pressed;
                events.entered = true;
            }

            if pointer.pressed {
                if !self.held && !self.pressed_on_enter {
                    events.down = true;
                }
                self.held = true;
                events.pressed = true;
            } else if self.held {
                self.held = false;
                if !self.pressed_on_enter {
                    events.clicked = true;
                }
                self.pressed_on_enter = false;
                events.up = true;
            } else {
                // The press that entered with the pointer ended elsewhere.
                self.pressed_on_enter = false;
            }
        } else if self.over {
            self.over = false;
            self.held = false;
            events.left = true;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (f32, f32, f32, f32) = (10.0, 10.0, 100.0, 50.0);

    fn over(pressed: bool) -> PointerState {
        PointerState::new(50.0, 30.0, pressed)
    }

    fn away(pressed: bool) -> PointerState {
        PointerState::new(0.0, 0.0, pressed)
    }

    #[test]
    fn enter_and_leave_fire_once() {
        let mut tracker = PointerTracker::new();

        let first = tracker.advance(over(false), BOUNDS);
        assert!(first.entered && first.over);

        let second = tracker.advance(over(false), BOUNDS);
        assert!(!second.entered && second.over);

        let gone = tracker.advance(away(false), BOUNDS);
        assert!(gone.left && !gone.over);
    }

    #[test]
    fn press_release_inside_clicks() {
        let mut tracker = PointerTracker::new();
        tracker.advance(over(false), BOUNDS);

        let down = tracker.advance(over(true), BOUNDS);
        assert!(down.down && down.pressed && !down.clicked);

        let held = tracker.advance(over(true), BOUNDS);
        assert!(!held.down && held.pressed);

        let up = tracker.advance(over(false), BOUNDS);
        assert!(up.up && up.clicked && !up.pressed);
    }

    #[test]
    fn press_started_outside_never_clicks() {
        let mut tracker = PointerTracker::new();
        tracker.advance(away(true), BOUNDS);

        let entered = tracker.advance(over(true), BOUNDS);
        assert!(entered.entered && !entered.down);

        let released = tracker.advance(over(false), BOUNDS);
        assert!(released.up && !released.clicked);

        // A fresh press afterwards behaves normally again.
        let down = tracker.advance(over(true), BOUNDS);
        assert!(down.down);
        let up = tracker.advance(over(false), BOUNDS);
        assert!(up.clicked);
    }

    #[test]
    fn leaving_while_held_cancels_the_press() {
        let mut tracker = PointerTracker::new();
        tracker.advance(over(false), BOUNDS);
        tracker.advance(over(true), BOUNDS);

        let gone = tracker.advance(away(true), BOUNDS);
        assert!(gone.left && !gone.clicked && !gone.up);

        let back = tracker.advance(over(false), BOUNDS);
        assert!(back.entered && !back.clicked);
    }
}
