//! Scene model: animated entities and their per-section targets
//!
//! - `table`:      Section Target Table: `(section, viewport) → SectionTargets`
//! - `layout`:     per-section content, background rules, layout validation
//! - `presets`:    the hand-authored `extended` and `classic` layouts
//! - `camera`:     pointer-follow camera rig and projection
//! - `background`: per-frame background color fade
//! - `spin`:       drag-to-rotate for the limited-edition model

pub mod background;
pub mod camera;
pub mod layout;
pub mod presets;
pub mod spin;
pub mod table;

pub use layout::{Backdrop, Layout, Panel, SectionContent};
pub use table::{SectionEntry, SectionTargetTable, TableError};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tween::{Easing, Vec3};

/// Viewport class, sampled when a transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Widths strictly below `breakpoint` are mobile.
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Every animated entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityId {
    /// The main product can
    CanGroup,
    /// Secondary, limited-edition can
    LimitedCanGroup,
    TitleText,
    DescriptionText,
    Logo,
}

impl EntityId {
    pub const ALL: [EntityId; 5] = [
        EntityId::CanGroup,
        EntityId::LimitedCanGroup,
        EntityId::TitleText,
        EntityId::DescriptionText,
        EntityId::Logo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityId::CanGroup => "can_group",
            EntityId::LimitedCanGroup => "limited_can_group",
            EntityId::TitleText => "title_text",
            EntityId::DescriptionText => "description_text",
            EntityId::Logo => "logo",
        }
    }

    /// Entities rendered as text (carry a [`TextTarget`]).
    pub fn is_text(self) -> bool {
        matches!(self, EntityId::TitleText | EntityId::DescriptionText)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Typography target for text entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTarget {
    pub content: String,
    pub font_size: f32,
    /// Wrap width in world units
    #[serde(default)]
    pub max_width: Option<f32>,
}

fn unit_scale() -> Vec3 {
    [1.0, 1.0, 1.0]
}

fn opaque() -> f32 {
    1.0
}

/// Target transform/opacity/typography bundle for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTarget {
    pub position: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "opaque")]
    pub opacity: f32,
    #[serde(default)]
    pub text: Option<TextTarget>,
    /// Overrides the shared transition duration for this entity
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub easing: Option<Easing>,
}

impl EntityTarget {
    /// Visible, unit-scaled, unrotated entity at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: unit_scale(),
            rotation: [0.0; 3],
            opacity: 1.0,
            text: None,
            duration_ms: None,
            easing: None,
        }
    }

    pub fn scaled(mut self, s: f32) -> Self {
        self.scale = [s, s, s];
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn faded(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_text(mut self, content: &str, font_size: f32, max_width: Option<f32>) -> Self {
        self.text = Some(TextTarget { content: content.to_string(), font_size, max_width });
        self
    }

    pub fn lasting(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Scaled to zero: present in the table but not visible.
    pub fn hidden(position: Vec3) -> Self {
        Self::at(position).scaled(0.0)
    }
}

/// One target bundle per entity for a `(section, viewport)` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionTargets(BTreeMap<EntityId, EntityTarget>);

impl SectionTargets {
    pub fn get(&self, entity: EntityId) -> Option<&EntityTarget> {
        self.0.get(&entity)
    }

    pub fn insert(&mut self, entity: EntityId, target: EntityTarget) -> Option<EntityTarget> {
        self.0.insert(entity, target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityTarget)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First entity without a bundle, if any.
    pub fn missing(&self) -> Option<EntityId> {
        EntityId::ALL.into_iter().find(|id| !self.0.contains_key(id))
    }

    /// Copy of `self` with every entry of `overrides` substituted.
    pub fn merged(&self, overrides: &SectionTargets) -> SectionTargets {
        let mut out = self.clone();
        for (id, target) in overrides.iter() {
            out.insert(*id, target.clone());
        }
        out
    }

    /// Explicit neutral pose: products at rest, limited can and all
    /// overlays invisible.
    pub fn neutral() -> Self {
        let mut t = SectionTargets::default();
        t.insert(EntityId::CanGroup, EntityTarget::at([0.0, 0.0, 2.5]));
        t.insert(EntityId::LimitedCanGroup, EntityTarget::hidden([0.0, 0.0, 0.0]));
        t.insert(
            EntityId::TitleText,
            EntityTarget::at([0.0, 0.0, -5.0]).faded(0.0).with_text("FOLIA", 4.0, None),
        );
        t.insert(
            EntityId::DescriptionText,
            EntityTarget::at([0.0, -1.0, -10.0]).faded(0.0).with_text("", 0.4, Some(12.0)),
        );
        t.insert(EntityId::Logo, EntityTarget::at([0.0, 3.0, 0.0]).faded(0.0));
        t
    }
}

impl FromIterator<(EntityId, EntityTarget)> for SectionTargets {
    fn from_iter<I: IntoIterator<Item = (EntityId, EntityTarget)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(ViewportClass::from_width(767.9, 768.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0, 768.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_neutral_is_complete() {
        assert_eq!(SectionTargets::neutral().missing(), None);
    }

    #[test]
    fn test_merged_overrides_only_named_entities() {
        let base = SectionTargets::neutral();
        let overrides: SectionTargets =
            [(EntityId::Logo, EntityTarget::at([0.0, 1.0, 0.0]).scaled(0.6))].into_iter().collect();
        let merged = base.merged(&overrides);
        assert_eq!(merged.get(EntityId::Logo).map(|t| t.scale), Some([0.6, 0.6, 0.6]));
        assert_eq!(merged.get(EntityId::CanGroup), base.get(EntityId::CanGroup));
        assert_eq!(merged.len(), EntityId::ALL.len());
    }

    #[test]
    fn test_entity_target_json_defaults() {
        let t: EntityTarget = serde_json::from_str(r#"{ "position": [0, 7, 2.5] }"#)
            .unwrap_or_else(|e| panic!("Expected valid target JSON: {e}"));
        assert_eq!(t.scale, [1.0, 1.0, 1.0]);
        assert_eq!(t.opacity, 1.0);
        assert!(t.text.is_none());
    }
}
