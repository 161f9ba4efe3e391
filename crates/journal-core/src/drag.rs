//! Pointer drag tracking for the sticky note.

use tracing::debug;

use crate::{STICKY_NOTE_HEIGHT, STICKY_NOTE_WIDTH};

/// Horizontal pointer offset that keeps the pointer centered on the note.
const OFFSET_X: i32 = (STICKY_NOTE_WIDTH / 2) as i32;

/// Vertical pointer offset that keeps the pointer centered on the note.
const OFFSET_Y: i32 = (STICKY_NOTE_HEIGHT / 2) as i32;

/// Top-left cell of the sticky note.
///
/// Signed so the note can be pushed partly past the top or left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPosition {
    pub x: i32,
    pub y: i32,
}

impl Default for DragPosition {
    fn default() -> Self {
        Self { x: 5, y: 5 }
    }
}

/// Rendered tilt of the sticky note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    /// Lifted off the page while being dragged.
    Lifted,
    /// Lying on the page.
    Resting,
}

impl Tilt {
    /// Rotation angle in degrees.
    pub fn degrees(self) -> i16 {
        match self {
            Tilt::Lifted => 5,
            Tilt::Resting => -3,
        }
    }
}

/// Converts raw pointer coordinates into the sticky note's placement.
#[derive(Debug, Default)]
pub struct DragTracker {
    position: DragPosition,
    active: bool,
}

impl DragTracker {
    /// Create a tracker with the note at its default spot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging. Calling this while already dragging is a no-op.
    pub fn press_start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        debug!(
            x = self.position.x,
            y = self.position.y,
            tilt = self.tilt().degrees(),
            "sticky note lifted"
        );
    }

    /// Follow the pointer if a drag is active.
    pub fn pointer_move(&mut self, column: u16, row: u16) {
        if !self.active {
            return;
        }
        self.position = DragPosition {
            x: i32::from(column) - OFFSET_X,
            y: i32::from(row) - OFFSET_Y,
        };
    }

    /// Stop dragging, whatever the previous state was.
    pub fn press_end(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        debug!(
            x = self.position.x,
            y = self.position.y,
            tilt = self.tilt().degrees(),
            "sticky note dropped"
        );
    }

    pub fn position(&self) -> DragPosition {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tilt(&self) -> Tilt {
        if self.active {
            Tilt::Lifted
        } else {
            Tilt::Resting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_while_inactive_is_ignored() {
        let mut tracker = DragTracker::new();
        let before = tracker.position();
        for (column, row) in [(0, 0), (40, 12), (u16::MAX, u16::MAX)] {
            tracker.pointer_move(column, row);
            assert_eq!(tracker.position(), before);
        }
    }

    #[test]
    fn test_move_while_active_centers_note() {
        let mut tracker = DragTracker::new();
        tracker.press_start();
        tracker.pointer_move(40, 12);
        assert_eq!(tracker.position(), DragPosition { x: 33, y: 9 });

        tracker.pointer_move(2, 1);
        assert_eq!(tracker.position(), DragPosition { x: -5, y: -2 });
    }

    #[test]
    fn test_press_end_always_deactivates() {
        let mut tracker = DragTracker::new();
        tracker.press_end();
        assert!(!tracker.is_active());

        tracker.press_start();
        tracker.press_start();
        assert!(tracker.is_active());
        tracker.press_end();
        assert!(!tracker.is_active());

        tracker.pointer_move(30, 30);
        assert_eq!(tracker.position(), DragPosition::default());
    }

    #[test]
    fn test_tilt_follows_drag_state() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.tilt(), Tilt::Resting);
        assert_eq!(tracker.tilt().degrees(), -3);

        tracker.press_start();
        assert_eq!(tracker.tilt(), Tilt::Lifted);
        assert_eq!(tracker.tilt().degrees(), 5);
    }
}
