//! Damped spring for pointer-driven values (drag to rotate).

/// Integration step; keeps stiff springs stable at low frame rates.
const STEP: f32 = 1.0 / 240.0;

/// One-dimensional mass/tension/friction spring.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(1.0, 280.0, 60.0)
    }
}

impl Spring {
    pub fn new(mass: f32, tension: f32, friction: f32) -> Self {
        Self { mass, tension, friction, value: 0.0, velocity: 0.0, target: 0.0 }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance by `dt` seconds (semi-implicit Euler, fixed sub-steps).
    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        let inv_mass = 1.0 / self.mass;
        while remaining > 0.0 {
            let h = remaining.min(STEP);
            let force = -self.tension * (self.value - self.target) - self.friction * self.velocity;
            self.velocity += force * inv_mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_resting(&self) -> bool {
        (self.value - self.target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut s = Spring::default();
        s.set_target(1.5);
        for _ in 0..120 {
            s.step(1.0 / 60.0);
        }
        assert!((s.value() - 1.5).abs() < 1e-2);
        assert!(s.is_resting() || s.velocity.abs() < 1e-2);
    }

    #[test]
    fn test_spring_moves_toward_target_without_overshoot() {
        // tension 280 / friction 60 is over-damped: monotonic approach.
        let mut s = Spring::default();
        s.set_target(1.0);
        let mut last = 0.0;
        for _ in 0..60 {
            s.step(1.0 / 60.0);
            assert!(s.value() >= last);
            assert!(s.value() <= 1.0 + 1e-4);
            last = s.value();
        }
    }
}
