//! Drag-to-rotate for the limited-edition model.

use crate::tween::Spring;

/// Pixels of horizontal drag per radian of rotation.
const PIXELS_PER_RADIAN: f32 = 200.0;

/// Spring-smoothed Y rotation driven by a horizontal drag offset.
///
/// Only accepts drags while enabled; the section decides that.
#[derive(Debug, Clone, Default)]
pub struct DragSpin {
    spring: Spring,
    enabled: bool,
    /// Accumulated offset across drags
    offset: f32,
    grabbed: bool,
}

impl DragSpin {
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.grabbed = false;
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Back to rest: no offset, spring at zero.
    pub fn reset(&mut self) {
        *self = Self { enabled: self.enabled, ..Self::default() };
    }

    /// Drag moved by `dx` pixels since the last call.
    pub fn drag(&mut self, dx: f32) {
        if !self.enabled {
            return;
        }
        self.grabbed = true;
        self.offset += dx;
        self.spring.set_target(self.offset / PIXELS_PER_RADIAN);
    }

    pub fn release(&mut self) {
        self.grabbed = false;
    }

    pub fn step(&mut self, dt: f32) -> f32 {
        self.spring.step(dt);
        self.spring.value()
    }

    pub fn angle(&self) -> f32 {
        self.spring.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_ignored_when_disabled() {
        let mut spin = DragSpin::default();
        spin.drag(400.0);
        spin.step(1.0);
        assert_eq!(spin.angle(), 0.0);
    }

    #[test]
    fn test_drag_sets_rotation_target() {
        let mut spin = DragSpin::default();
        spin.set_enabled(true);
        spin.drag(250.0);
        spin.drag(150.0);
        assert!(spin.is_grabbed());
        spin.release();
        for _ in 0..180 {
            spin.step(1.0 / 60.0);
        }
        assert!((spin.angle() - 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_reset_forgets_previous_drags() {
        let mut spin = DragSpin::default();
        spin.set_enabled(true);
        spin.drag(400.0);
        spin.step(0.5);
        spin.reset();
        assert_eq!(spin.angle(), 0.0);
        assert!(!spin.is_grabbed());

        spin.drag(100.0);
        for _ in 0..180 {
            spin.step(1.0 / 60.0);
        }
        assert!((spin.angle() - 0.5).abs() < 1e-2);
    }
}
