//! Touch swipe recognition
//!
//! Tracks a single finger from press to release and reports a swipe when
//! the travel exceeds the threshold. Vertical swipes navigate:
//! - Swipe up (finger moves toward the top) → advance
//! - Swipe down → retreat
//!
//! Horizontal swipes are reported but carry no navigation intent.

use std::time::Instant;

use super::NavigationIntent;

/// Touch point
#[derive(Debug, Clone, Copy)]
struct TouchPoint {
    x: f32,
    y: f32,
    id: u64,
    time: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Recognized swipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub direction: SwipeDirection,
    /// Pixels per second
    pub velocity: f32,
}

impl Swipe {
    pub fn intent(&self) -> Option<NavigationIntent> {
        match self.direction {
            SwipeDirection::Up => Some(NavigationIntent::Advance),
            SwipeDirection::Down => Some(NavigationIntent::Retreat),
            SwipeDirection::Left | SwipeDirection::Right => None,
        }
    }
}

/// Single-finger swipe state machine.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    /// Finger that started the gesture
    start: Option<TouchPoint>,
    /// Set when a second finger lands; the gesture is then not a swipe
    multi_touch: bool,
    /// Minimum travel in pixels
    threshold: f32,
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl SwipeRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self { start: None, multi_touch: false, threshold }
    }

    pub fn touch_start(&mut self, x: f32, y: f32, id: u64, now: Instant) {
        if self.start.is_some() {
            self.multi_touch = true;
            return;
        }
        self.start = Some(TouchPoint { x, y, id, time: now });
    }

    /// Process touch end event. Returns a swipe if one was recognized.
    pub fn touch_end(&mut self, x: f32, y: f32, id: u64, now: Instant) -> Option<Swipe> {
        let start = match self.start {
            Some(s) if s.id == id => s,
            _ => return None,
        };
        self.start = None;
        if std::mem::take(&mut self.multi_touch) {
            return None;
        }

        let dx = x - start.x;
        let dy = y - start.y;
        let dist = dx.hypot(dy);
        if dist < self.threshold {
            return None;
        }

        let secs = now.saturating_duration_since(start.time).as_secs_f32().max(0.001);
        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left }
        } else if dy < 0.0 {
            // Screen Y grows downward
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };

        Some(Swipe { direction, velocity: dist / secs })
    }

    /// Drop any gesture in progress.
    pub fn cancel(&mut self) {
        self.start = None;
        self.multi_touch = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_swipe_up_advances() {
        let t0 = Instant::now();
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(200.0, 600.0, 1, t0);
        let Some(swipe) = rec.touch_end(205.0, 400.0, 1, t0 + Duration::from_millis(200)) else {
            panic!("Expected a swipe");
        };
        assert_eq!(swipe.direction, SwipeDirection::Up);
        assert_eq!(swipe.intent(), Some(NavigationIntent::Advance));
        assert!(swipe.velocity > 900.0);
    }

    #[test]
    fn test_short_travel_is_not_a_swipe() {
        let t0 = Instant::now();
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(100.0, 100.0, 1, t0);
        assert!(rec.touch_end(100.0, 130.0, 1, t0).is_none());
    }

    #[test]
    fn test_horizontal_swipe_has_no_intent() {
        let t0 = Instant::now();
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(100.0, 100.0, 1, t0);
        let Some(swipe) = rec.touch_end(300.0, 120.0, 1, t0) else {
            panic!("Expected a swipe");
        };
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert_eq!(swipe.intent(), None);
    }

    #[test]
    fn test_second_finger_cancels() {
        let t0 = Instant::now();
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(100.0, 500.0, 1, t0);
        rec.touch_start(150.0, 500.0, 2, t0);
        assert!(rec.touch_end(150.0, 200.0, 2, t0).is_none());
        assert!(rec.touch_end(100.0, 200.0, 1, t0).is_none());
    }
}
