//! The tween-driver seam between the orchestrator and the scene.
//!
//! The orchestrator only ever *issues* commands through [`TweenDriver`];
//! renderers read interpolated [`EntityPose`]s back out of [`SceneTweens`].

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::{Easing, Tween, Vec3};
use crate::scene::{EntityId, EntityTarget, SectionTargets};

/// Duration and easing for one entity's tween group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub easing: Easing,
}

/// Receives per-entity tween commands.
///
/// All property groups of the entity (position, scale, rotation, opacity,
/// numeric text attributes) are tweened concurrently. A command for an
/// entity that is still moving retargets from its current values.
pub trait TweenDriver {
    fn animate(&mut self, entity: EntityId, target: &EntityTarget, spec: TweenSpec, now: Instant);
}

/// Interpolated state of one entity at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPose {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
    pub opacity: f32,
    pub font_size: f32,
    pub max_width: Option<f32>,
    pub content: String,
}

#[derive(Debug, Clone)]
struct Channels {
    position: Tween<Vec3>,
    scale: Tween<Vec3>,
    rotation: Tween<Vec3>,
    opacity: Tween<f32>,
    font_size: Tween<f32>,
    max_width: Tween<f32>,
    wraps: bool,
    content: String,
}

impl Channels {
    fn resting(target: &EntityTarget) -> Self {
        let (font_size, max_width, content) = match &target.text {
            Some(t) => (t.font_size, t.max_width, t.content.clone()),
            None => (0.0, None, String::new()),
        };
        Self {
            position: Tween::settled(target.position),
            scale: Tween::settled(target.scale),
            rotation: Tween::settled(target.rotation),
            opacity: Tween::settled(target.opacity),
            font_size: Tween::settled(font_size),
            max_width: Tween::settled(max_width.unwrap_or(0.0)),
            wraps: max_width.is_some(),
            content,
        }
    }

    fn pose(&self, now: Instant) -> EntityPose {
        EntityPose {
            position: self.position.value_at(now),
            scale: self.scale.value_at(now),
            rotation: self.rotation.value_at(now),
            opacity: self.opacity.value_at(now),
            font_size: self.font_size.value_at(now),
            max_width: self.wraps.then(|| self.max_width.value_at(now)),
            content: self.content.clone(),
        }
    }

    fn is_running(&self, now: Instant) -> bool {
        self.position.is_running(now)
            || self.scale.is_running(now)
            || self.rotation.is_running(now)
            || self.opacity.is_running(now)
            || self.font_size.is_running(now)
            || self.max_width.is_running(now)
    }
}

/// Live animated state for every scene entity.
#[derive(Debug, Clone)]
pub struct SceneTweens {
    channels: BTreeMap<EntityId, Channels>,
    issued: usize,
}

impl SceneTweens {
    /// All entities resting at `initial`.
    pub fn new(initial: &SectionTargets) -> Self {
        let channels = initial
            .iter()
            .map(|(id, target)| (*id, Channels::resting(target)))
            .collect();
        Self { channels, issued: 0 }
    }

    /// Tween commands received so far.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn pose(&self, entity: EntityId, now: Instant) -> Option<EntityPose> {
        self.channels.get(&entity).map(|c| c.pose(now))
    }

    /// Poses of every entity, in [`EntityId`] order.
    pub fn poses(&self, now: Instant) -> Vec<(EntityId, EntityPose)> {
        self.channels.iter().map(|(id, c)| (*id, c.pose(now))).collect()
    }

    /// True once every property of every entity has reached its target.
    pub fn is_settled(&self, now: Instant) -> bool {
        !self.channels.values().any(|c| c.is_running(now))
    }
}

impl TweenDriver for SceneTweens {
    fn animate(&mut self, entity: EntityId, target: &EntityTarget, spec: TweenSpec, now: Instant) {
        let ch = self
            .channels
            .entry(entity)
            .or_insert_with(|| Channels::resting(target));

        if ch.is_running(now) {
            log::debug!("Retarget {} mid-flight", entity.name());
        }
        self.issued += 1;

        let TweenSpec { duration, easing } = spec;
        ch.position.retarget(target.position, duration, easing, now);
        ch.scale.retarget(target.scale, duration, easing, now);
        ch.rotation.retarget(target.rotation, duration, easing, now);
        ch.opacity.retarget(target.opacity, duration, easing, now);

        if let Some(text) = &target.text {
            ch.font_size.retarget(text.font_size, duration, easing, now);
            match text.max_width {
                Some(w) => {
                    if !ch.wraps {
                        ch.max_width.snap(w);
                    }
                    ch.max_width.retarget(w, duration, easing, now);
                    ch.wraps = true;
                }
                None => ch.wraps = false,
            }
            // Strings swap immediately; only numeric attributes interpolate.
            if ch.content != text.content {
                ch.content.clone_from(&text.content);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TextTarget;

    fn spec(ms: u64) -> TweenSpec {
        TweenSpec { duration: Duration::from_millis(ms), easing: Easing::Linear }
    }

    fn title(font_size: f32, opacity: f32) -> EntityTarget {
        EntityTarget {
            opacity,
            text: Some(TextTarget { content: "FOLIA".into(), font_size, max_width: None }),
            ..EntityTarget::at([0.0, 0.0, -2.0])
        }
    }

    #[test]
    fn test_all_property_groups_move_together() {
        let t0 = Instant::now();
        let mut initial = SectionTargets::default();
        initial.insert(EntityId::TitleText, title(4.0, 0.0));
        let mut tweens = SceneTweens::new(&initial);

        let mut target = title(2.0, 1.0);
        target.position = [0.0, 2.0, -2.0];
        tweens.animate(EntityId::TitleText, &target, spec(1000), t0);

        let Some(mid) = tweens.pose(EntityId::TitleText, t0 + Duration::from_millis(500)) else {
            panic!("Expected a title pose");
        };
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.font_size - 3.0).abs() < 1e-4);
        assert!((mid.position[1] - 1.0).abs() < 1e-4);
        assert!(!tweens.is_settled(t0 + Duration::from_millis(500)));
        assert!(tweens.is_settled(t0 + Duration::from_millis(1000)));
        assert_eq!(tweens.issued(), 1);
    }

    #[test]
    fn test_unknown_entity_is_adopted() {
        let t0 = Instant::now();
        let mut tweens = SceneTweens::new(&SectionTargets::default());
        tweens.animate(EntityId::Logo, &EntityTarget::at([1.0, 0.0, 0.0]), spec(100), t0);
        assert_eq!(
            tweens.pose(EntityId::Logo, t0).map(|p| p.position),
            Some([1.0, 0.0, 0.0])
        );
    }
}
