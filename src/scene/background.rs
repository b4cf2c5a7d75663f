//! Scene background color fade.

use crate::color::{mix, Rgba};

/// Background color that chases its target every frame.
#[derive(Debug, Clone)]
pub struct BackgroundFade {
    current: [f32; 4],
    target: Rgba,
    /// Fraction of the remaining distance covered per second
    rate: f32,
}

impl BackgroundFade {
    pub fn new(initial: Rgba, rate: f32) -> Self {
        Self { current: initial.to_f32(), target: initial, rate }
    }

    pub fn set_target(&mut self, target: Rgba) {
        self.target = target;
    }

    pub fn target(&self) -> Rgba {
        self.target
    }

    /// Move toward the target by `min(dt * rate, 1)`.
    pub fn step(&mut self, dt: f32) -> Rgba {
        let t = (dt * self.rate).clamp(0.0, 1.0);
        self.current = mix(self.current, self.target.to_f32(), t);
        self.color()
    }

    pub fn color(&self) -> Rgba {
        Rgba::from_f32(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex_color;

    #[test]
    fn test_fade_approaches_target() {
        let mut bg = BackgroundFade::new(Rgba::BLACK, 2.0);
        bg.set_target(Rgba::WHITE);
        let half = bg.step(0.25);
        assert_eq!(half, Rgba { r: 128, g: 128, b: 128, a: 255 });
        for _ in 0..240 {
            bg.step(1.0 / 60.0);
        }
        assert_eq!(bg.color(), Rgba::WHITE);
    }

    #[test]
    fn test_large_dt_lands_exactly() {
        let mut bg = BackgroundFade::new(parse_hex_color("#b6b2bf"), 2.0);
        let target = parse_hex_color("#4a4e69");
        bg.set_target(target);
        assert_eq!(bg.step(1.0), target);
    }
}
