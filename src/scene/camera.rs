//! Pointer-follow camera rig.
//!
//! Runs every frame regardless of orchestrator state. The rig only *reads*
//! the current section (for the pinned-Y override); it never changes it.

use serde::{Deserialize, Serialize};

use crate::tween::{Lerp, Vec3};

/// Camera follow tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the remaining distance covered per frame
    pub follow_factor: f32,
    /// World units per unit of normalized pointer offset
    pub pointer_gain: f32,
    /// Camera Z distance from the origin
    pub distance: f32,
    /// Vertical target used in the pinned section
    pub pinned_y: f32,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_factor: 0.025,
            pointer_gain: 0.5,
            distance: 8.0,
            pinned_y: 0.5,
            fov_deg: 50.0,
        }
    }
}

/// Camera that eases toward a pointer-derived target and looks at the origin.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    position: Vec3,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self { config, position: [0.0, 0.0, config.distance] }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Where the camera is heading for a pointer in `[-1, 1]²` (Y up).
    pub fn target(&self, pointer: [f32; 2], section: usize, pinned: Option<usize>) -> Vec3 {
        let gain = self.config.pointer_gain;
        let y = if pinned == Some(section) {
            self.config.pinned_y
        } else {
            pointer[1] * gain
        };
        [pointer[0] * gain, y, self.config.distance]
    }

    /// One frame of the follow loop.
    pub fn step(&mut self, pointer: [f32; 2], section: usize, pinned: Option<usize>) -> Vec3 {
        let target = self.target(pointer, section, pinned);
        self.position = self.position.lerp(target, self.config.follow_factor);
        self.position
    }

    /// Perspective projection of a world point looking at the origin.
    ///
    /// Returns normalized device coordinates `[x, y]` in `[-1, 1]` (Y up)
    /// and the world-to-NDC scale at that depth, or `None` behind the camera.
    pub fn project(&self, point: Vec3, aspect: f32) -> Option<([f32; 2], f32)> {
        let eye = self.position;
        let forward = normalize(sub([0.0; 3], eye));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);

        let rel = sub(point, eye);
        let depth = dot(rel, forward);
        if depth <= 0.1 {
            return None;
        }
        let half_h = (self.config.fov_deg.to_radians() * 0.5).tan() * depth;
        let scale = 1.0 / half_h;
        let x = dot(rel, right) * scale / aspect.max(1e-3);
        let y = dot(rel, up) * scale;
        Some(([x, y], scale))
    }
}

#[inline]
fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0].mul_add(b[0], a[1].mul_add(b[1], a[2] * b[2]))
}

#[inline]
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len < 1e-6 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_covers_follow_factor() {
        let mut rig = CameraRig::new(CameraConfig::default());
        let p = rig.step([1.0, 1.0], 0, None);
        // Target (0.5, 0.5, 8); 2.5% of the way from (0, 0, 8).
        assert!((p[0] - 0.0125).abs() < 1e-6);
        assert!((p[1] - 0.0125).abs() < 1e-6);
        assert!((p[2] - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinned_section_ignores_pointer_y() {
        let rig = CameraRig::new(CameraConfig::default());
        assert_eq!(rig.target([0.4, -1.0], 7, Some(7))[1], 0.5);
        assert_eq!(rig.target([0.4, -1.0], 6, Some(7))[1], -0.5);
    }

    #[test]
    fn test_converges_over_many_frames() {
        let mut rig = CameraRig::new(CameraConfig::default());
        for _ in 0..1000 {
            rig.step([-1.0, 0.0], 3, None);
        }
        assert!((rig.position()[0] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_project_origin_is_center() {
        let rig = CameraRig::new(CameraConfig::default());
        let Some((ndc, _)) = rig.project([0.0, 0.0, 0.0], 16.0 / 9.0) else {
            panic!("Expected origin in front of camera");
        };
        assert!(ndc[0].abs() < 1e-6 && ndc[1].abs() < 1e-6);
        assert!(rig.project([0.0, 0.0, 9.0], 1.0).is_none());
    }

    #[test]
    fn test_project_keeps_orientation() {
        let rig = CameraRig::new(CameraConfig::default());
        let Some((ndc, _)) = rig.project([1.0, 1.0, 0.0], 1.0) else {
            panic!("Expected point in front of camera");
        };
        assert!(ndc[0] > 0.0 && ndc[1] > 0.0);
    }
}
