//! Touch gesture recognition.
//!
//! A gesture is a touch start followed by one move. The move is compared with the
//! start point:
//!
//! - mostly horizontal and shorter than [`SWIPE_DELTA_PX`]: left or right
//! - mostly vertical, downward, within [`SWIPE_DOWN_TIME_THRESHOLD_MS`]: down
//! - anything else: ignored
//!
//! After a move the start point is forgotten, so the next move needs a new touch
//! start. A tap on the board rotates.

use crate::types::{Command, SWIPE_DELTA_PX, SWIPE_DOWN_TIME_THRESHOLD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TouchStart {
    x: i32,
    y: i32,
    at_ms: u64,
}

/// Turns raw touch coordinates into commands.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<TouchStart>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where and when a touch began (screen pixels, host clock in ms).
    pub fn touch_start(&mut self, x: i32, y: i32, at_ms: u64) {
        self.start = Some(TouchStart { x, y, at_ms });
    }

    /// Classify a touch move against the recorded start.
    pub fn touch_move(&mut self, x: i32, y: i32, at_ms: u64) -> Option<Command> {
        let start = self.start.take()?;
        // Positive means the finger moved left / up.
        let dx = start.x - x;
        let dy = start.y - y;
        let elapsed = at_ms.saturating_sub(start.at_ms);

        if dx.abs() > dy.abs() {
            if dx.abs() >= SWIPE_DELTA_PX {
                return None;
            }
            Some(if dx > 0 { Command::Left } else { Command::Right })
        } else if dx.abs() < dy.abs() {
            (elapsed < SWIPE_DOWN_TIME_THRESHOLD_MS && dy < 0).then_some(Command::Down)
        } else {
            None
        }
    }

    /// A tap on the play surface.
    pub fn tap(&mut self) -> Command {
        self.start = None;
        Command::Rotate
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_horizontal_swipes() {
        let mut t = SwipeTracker::new();
        t.touch_start(200, 300, 0);
        assert_eq!(t.touch_move(170, 305, 40), Some(Command::Left));

        t.touch_start(200, 300, 0);
        assert_eq!(t.touch_move(230, 290, 40), Some(Command::Right));
    }

    #[test]
    fn test_long_horizontal_swipe_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_start(200, 300, 0);
        assert_eq!(t.touch_move(200 - SWIPE_DELTA_PX, 300, 10), None);
    }

    #[test]
    fn test_fast_downward_swipe() {
        let mut t = SwipeTracker::new();
        t.touch_start(100, 100, 1_000);
        assert_eq!(t.touch_move(105, 160, 1_100), Some(Command::Down));
    }

    #[test]
    fn test_slow_or_upward_swipe_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_start(100, 100, 1_000);
        assert_eq!(t.touch_move(100, 160, 1_000 + SWIPE_DOWN_TIME_THRESHOLD_MS), None);

        t.touch_start(100, 100, 0);
        assert_eq!(t.touch_move(100, 40, 20), None);
    }

    #[test]
    fn test_move_needs_new_start() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.touch_move(10, 10, 0), None);

        t.touch_start(200, 300, 0);
        assert!(t.is_tracking());
        assert_eq!(t.touch_move(190, 300, 5), Some(Command::Left));
        assert!(!t.is_tracking());
        assert_eq!(t.touch_move(180, 300, 10), None);
    }

    #[test]
    fn test_tap_rotates() {
        let mut t = SwipeTracker::new();
        t.touch_start(1, 1, 0);
        assert_eq!(t.tap(), Command::Rotate);
        assert!(!t.is_tracking());
    }
}
