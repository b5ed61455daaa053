//! Swipe and tap classification
//!
//! A gesture is a start point and an end point. Short gestures are taps and
//! rotate; longer ones move along their dominant axis, with an upward swipe
//! meaning hard drop.

use crate::game::Command;

/// Gestures shorter than this on both axes count as taps
pub const DEFAULT_TAP_THRESHOLD: f32 = 20.0;

/// A position in gesture units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Turns gesture deltas into commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMapper {
    threshold: f32,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_THRESHOLD)
    }
}

impl GestureMapper {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Exactly one command per completed gesture
    pub fn classify(&self, start: Point, end: Point) -> Command {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx.abs() < self.threshold && dy.abs() < self.threshold {
            Command::Rotate
        } else if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Command::MoveRight
            } else {
                Command::MoveLeft
            }
        } else if dy > 0.0 {
            Command::SoftDrop
        } else {
            Command::HardDrop
        }
    }
}

/// Pairs a press with its release
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture in progress. A release with no press yields nothing.
    pub fn end(&mut self, at: Point) -> Option<(Point, Point)> {
        self.start.take().map(|start| (start, at))
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(dx: f32, dy: f32) -> Command {
        GestureMapper::default().classify(Point::new(50.0, 50.0), Point::new(50.0 + dx, 50.0 + dy))
    }

    #[test]
    fn test_tap_rotates() {
        assert_eq!(classify(0.0, 0.0), Command::Rotate);
        assert_eq!(classify(19.9, -19.9), Command::Rotate);
        assert_eq!(classify(-5.0, 12.0), Command::Rotate);
    }

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(classify(20.0, 0.0), Command::MoveRight);
        assert_eq!(classify(-40.0, 10.0), Command::MoveLeft);
        assert_eq!(classify(80.0, -79.0), Command::MoveRight);
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify(0.0, 20.0), Command::SoftDrop);
        assert_eq!(classify(5.0, -30.0), Command::HardDrop);
    }

    #[test]
    fn test_diagonal_tie_goes_vertical() {
        assert_eq!(classify(30.0, 30.0), Command::SoftDrop);
        assert_eq!(classify(-30.0, -30.0), Command::HardDrop);
    }

    #[test]
    fn test_threshold_applies_per_axis() {
        // Long enough on one axis only is still a swipe
        assert_eq!(classify(25.0, 1.0), Command::MoveRight);
        assert_eq!(classify(1.0, -25.0), Command::HardDrop);
    }

    #[test]
    fn test_custom_threshold() {
        let mapper = GestureMapper::new(5.0);
        assert_eq!(
            mapper.classify(Point::new(0.0, 0.0), Point::new(-6.0, 0.0)),
            Command::MoveLeft
        );
        assert_eq!(mapper.threshold(), 5.0);
    }

    #[test]
    fn test_tracker_pairs_press_and_release() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.end(Point::new(1.0, 1.0)), None);

        tracker.begin(Point::new(1.0, 2.0));
        assert!(tracker.in_progress());
        assert_eq!(
            tracker.end(Point::new(3.0, 4.0)),
            Some((Point::new(1.0, 2.0), Point::new(3.0, 4.0)))
        );
        assert!(!tracker.in_progress());
        assert_eq!(tracker.end(Point::new(3.0, 4.0)), None);
    }

    #[test]
    fn test_tracker_cancel() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::default());
        tracker.cancel();
        assert_eq!(tracker.end(Point::new(100.0, 0.0)), None);
    }
}
