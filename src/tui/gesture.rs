//! # Gestures
//!
//! Pointer tracking for the two mouse gestures:
//!
//! - **Drag**: press, move vertically, release. Travelling at least the
//!   threshold upward is a swipe up; downward is a swipe down.
//! - **Long press**: press on the brand label and hold without moving.
//!
//! Both trackers are plain state machines fed with rows and instants, so they
//! test without a terminal.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

/// Vertical drag tracking in terminal rows.
#[derive(Debug)]
pub struct DragTracker {
    threshold: u16,
    start_row: Option<u16>,
    current_row: u16,
}

impl DragTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            start_row: None,
            current_row: 0,
        }
    }

    pub fn begin(&mut self, row: u16) {
        self.start_row = Some(row);
        self.current_row = row;
    }

    pub fn update(&mut self, row: u16) {
        if self.start_row.is_some() {
            self.current_row = row;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start_row.is_some()
    }

    /// Signed travel so far; negative is upward.
    pub fn offset(&self) -> i32 {
        self.start_row
            .map_or(0, |start| self.current_row as i32 - start as i32)
    }

    /// Finishes the drag and classifies it.
    pub fn end(&mut self) -> Option<Swipe> {
        let offset = self.offset();
        self.start_row = None;
        let threshold = self.threshold as i32;
        if offset <= -threshold {
            Some(Swipe::Up)
        } else if offset >= threshold {
            Some(Swipe::Down)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_row = None;
    }
}

/// Hold detection for the brand label.
#[derive(Debug)]
pub struct LongPress {
    hold: Duration,
    pressed_at: Option<Instant>,
}

impl LongPress {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            pressed_at: None,
        }
    }

    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Release or movement before the hold elapsed.
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// True exactly once, the first time it's polled after the hold elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pressed_at {
            Some(at) if now.duration_since(at) >= self.hold => {
                self.pressed_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_up_past_threshold() {
        let mut drag = DragTracker::new(3);
        drag.begin(10);
        drag.update(8);
        assert_eq!(drag.offset(), -2);
        drag.update(7);
        assert_eq!(drag.end(), Some(Swipe::Up));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_down_past_threshold() {
        let mut drag = DragTracker::new(3);
        drag.begin(4);
        drag.update(9);
        assert_eq!(drag.end(), Some(Swipe::Down));
    }

    #[test]
    fn test_short_drag_is_nothing() {
        let mut drag = DragTracker::new(3);
        drag.begin(10);
        drag.update(12);
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn test_update_without_begin_is_ignored() {
        let mut drag = DragTracker::new(3);
        drag.update(20);
        assert_eq!(drag.offset(), 0);
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn test_long_press_fires_once() {
        let start = Instant::now();
        let mut press = LongPress::new(Duration::from_millis(500));
        press.press(start);
        assert!(!press.poll(start + Duration::from_millis(499)));
        assert!(press.poll(start + Duration::from_millis(500)));
        assert!(!press.poll(start + Duration::from_millis(900)));
        assert!(!press.is_pending());
    }

    #[test]
    fn test_long_press_cancelled() {
        let start = Instant::now();
        let mut press = LongPress::new(Duration::from_millis(500));
        press.press(start);
        press.cancel();
        assert!(!press.poll(start + Duration::from_secs(2)));
    }
}
