//! Scroll wheel adapter.
//!
//! Uses the browser convention: positive `delta_y` means the user scrolled
//! down (toward later sections). egui reports the opposite sign, see
//! [`WheelAdapter::on_egui_scroll`].

use super::NavigationIntent;

/// Deltas with a smaller magnitude are treated as jitter.
const DEAD_ZONE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAdapter;

impl WheelAdapter {
    /// Intent for one wheel event. Nothing is produced while a transition
    /// is in flight, so a burst of wheel events becomes one navigation.
    pub fn on_wheel(&self, delta_y: f32, animating: bool) -> Option<NavigationIntent> {
        if animating || delta_y.abs() < DEAD_ZONE {
            return None;
        }
        if delta_y > 0.0 {
            Some(NavigationIntent::Advance)
        } else {
            Some(NavigationIntent::Retreat)
        }
    }

    /// Same as [`on_wheel`](Self::on_wheel) for egui's scroll delta, where
    /// scrolling down yields a negative `y`.
    pub fn on_egui_scroll(&self, scroll_y: f32, animating: bool) -> Option<NavigationIntent> {
        self.on_wheel(-scroll_y, animating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_sign() {
        let wheel = WheelAdapter;
        assert_eq!(wheel.on_wheel(120.0, false), Some(NavigationIntent::Advance));
        assert_eq!(wheel.on_wheel(-3.0, false), Some(NavigationIntent::Retreat));
        assert_eq!(wheel.on_egui_scroll(-40.0, false), Some(NavigationIntent::Advance));
    }

    #[test]
    fn test_gated_while_animating() {
        let wheel = WheelAdapter;
        assert_eq!(wheel.on_wheel(120.0, true), None);
        assert_eq!(wheel.on_wheel(0.1, false), None);
    }
}
