//! Navigation dots: one per section, the active one enlarged.

use std::time::{Duration, Instant};

use super::NavigationIntent;
use crate::tween::{Easing, Tween};

const DOT_DURATION: Duration = Duration::from_millis(300);
const ACTIVE_SCALE: f32 = 1.5;
const ACTIVE_OPACITY: f32 = 1.0;
const IDLE_SCALE: f32 = 1.0;
const IDLE_OPACITY: f32 = 0.4;

/// Sampled dot appearance for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotState {
    pub scale: f32,
    pub opacity: f32,
    pub active: bool,
}

#[derive(Debug, Clone)]
struct Dot {
    scale: Tween<f32>,
    opacity: Tween<f32>,
}

impl Dot {
    fn resting(active: bool) -> Self {
        let (scale, opacity) = look(active);
        Self { scale: Tween::settled(scale), opacity: Tween::settled(opacity) }
    }

    fn animate(&mut self, active: bool, now: Instant) {
        let (scale, opacity) = look(active);
        self.scale.retarget(scale, DOT_DURATION, Easing::QuadInOut, now);
        self.opacity.retarget(opacity, DOT_DURATION, Easing::QuadInOut, now);
    }
}

fn look(active: bool) -> (f32, f32) {
    if active {
        (ACTIVE_SCALE, ACTIVE_OPACITY)
    } else {
        (IDLE_SCALE, IDLE_OPACITY)
    }
}

/// Dot indicator strip. Follows the committed section, so the destination
/// dot lights up as soon as a transition is accepted.
#[derive(Debug, Clone)]
pub struct NavDots {
    dots: Vec<Dot>,
    active: usize,
}

impl NavDots {
    pub fn new(total: usize, active: usize) -> Self {
        let dots = (0..total).map(|i| Dot::resting(i == active)).collect();
        Self { dots, active }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Move the highlight. A no-op when `section` is already active.
    pub fn set_active(&mut self, section: usize, now: Instant) {
        if section == self.active || section >= self.dots.len() {
            return;
        }
        if let Some(old) = self.dots.get_mut(self.active) {
            old.animate(false, now);
        }
        self.dots[section].animate(true, now);
        self.active = section;
    }

    pub fn sample(&self, now: Instant) -> Vec<DotState> {
        self.dots
            .iter()
            .enumerate()
            .map(|(i, dot)| DotState {
                scale: dot.scale.value_at(now),
                opacity: dot.opacity.value_at(now),
                active: i == self.active,
            })
            .collect()
    }

    /// Intent for a click on dot `index`.
    pub fn click(&self, index: usize) -> Option<NavigationIntent> {
        (index < self.dots.len()).then_some(NavigationIntent::JumpTo(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_highlight() {
        let dots = NavDots::new(6, 0);
        let states = dots.sample(Instant::now());
        assert_eq!(states.len(), 6);
        assert_eq!(states[0], DotState { scale: 1.5, opacity: 1.0, active: true });
        assert_eq!(states[3], DotState { scale: 1.0, opacity: 0.4, active: false });
    }

    #[test]
    fn test_highlight_moves_over_300ms() {
        let t0 = Instant::now();
        let mut dots = NavDots::new(9, 0);
        dots.set_active(3, t0);

        let mid = dots.sample(t0 + Duration::from_millis(150));
        assert!(mid[3].scale > 1.0 && mid[3].scale < 1.5);
        assert!(mid[0].opacity > 0.4 && mid[0].opacity < 1.0);
        assert!(mid[3].active);

        let done = dots.sample(t0 + Duration::from_millis(300));
        assert_eq!(done[3].scale, 1.5);
        assert_eq!(done[0].opacity, 0.4);
    }

    #[test]
    fn test_click_bounds() {
        let dots = NavDots::new(9, 0);
        assert_eq!(dots.click(4), Some(NavigationIntent::JumpTo(4)));
        assert_eq!(dots.click(9), None);
    }
}
