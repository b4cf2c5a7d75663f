//! Tween Driver: time-bounded interpolation toward target values
//!
//! A [`Tween`] interpolates a property from its current value to a target
//! over a duration with an [`Easing`] curve. Retargeting a tween that is
//! still in flight restarts it from the value it has *now*, not from where
//! it originally started, so reversing direction mid-transition never snaps.
//!
//! - `driver`: the [`TweenDriver`] seam and the scene-wide implementation
//! - `spring`: damped spring used for drag-to-rotate

pub mod driver;
pub mod spring;

pub use driver::{EntityPose, SceneTweens, TweenDriver, TweenSpec};
pub use spring::Spring;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// 3-component vector, `[x, y, z]`.
pub type Vec3 = [f32; 3];

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic in-out (dot indicators)
    QuadInOut,
    /// Cubic in-out, a.k.a. power3.inOut (section transitions)
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t ∈ [0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) * 0.5
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
                }
            }
        }
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        (to - self).mul_add(t, self)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        [
            self[0].lerp(to[0], t),
            self[1].lerp(to[1], t),
            self[2].lerp(to[2], t),
        ]
    }
}

/// One animated property.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// A tween resting at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(start) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(p))
    }

    /// Start moving toward `to`, beginning from the value held at `now`.
    pub fn retarget(&mut self, to: T, duration: Duration, easing: Easing, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Jump to `value` with no interpolation.
    pub fn snap(&mut self, value: T) {
        *self = Self::settled(value);
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}
