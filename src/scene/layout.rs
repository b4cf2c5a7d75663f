//! Section layout: how many sections there are, what each one shows.
//!
//! Content selection is a direct `section → content` lookup; sections with
//! no content entry render no panel.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::table::{SectionTargetTable, TableError};
use super::{SectionTargets, ViewportClass};
use crate::catalog::Variant;
use crate::color::{try_parse_hex, Rgba};

/// 2-D overlay panel shown for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// "Continue" control that jumps to `to`
    Continue { to: usize, label: String },
    About,
    /// Flavor picker with ingredients and nutrition
    Configurator,
    Lifestyle,
    LimitedEdition,
    CallToAction,
}

/// Background color rule for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    /// Fixed hex color
    Fixed(String),
    /// The active variant's background token
    Variant,
}

impl Backdrop {
    pub fn resolve(&self, active: &Variant) -> Rgba {
        match self {
            Backdrop::Fixed(hex) => try_parse_hex(hex).unwrap_or(Rgba::BLACK),
            Backdrop::Variant => active.background(),
        }
    }
}

/// Everything the panel renderer needs for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Short label, also used as the nav-dot tooltip
    pub title: String,
    #[serde(default)]
    pub panel: Option<Panel>,
    pub backdrop: Backdrop,
}

/// A complete showcase layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub total_sections: usize,
    pub table: SectionTargetTable,
    pub content: BTreeMap<usize, SectionContent>,
    /// Section whose camera target ignores pointer Y
    #[serde(default)]
    pub pinned_camera_section: Option<usize>,
    /// Sections where the limited-edition model is mounted
    #[serde(default)]
    pub limited_sections: BTreeSet<usize>,
    /// Section where the limited-edition model can be spun by dragging
    #[serde(default)]
    pub spin_section: Option<usize>,
    /// Backdrop for sections without content
    pub default_backdrop: Backdrop,
    /// Scene background before the first frame
    pub initial_background: String,
    /// Where entities sit when the scene mounts, before the intro tween
    /// to section 0. Entities not listed mount at their section 0 pose.
    #[serde(default)]
    pub mount: SectionTargets,
}

impl Layout {
    pub fn content(&self, section: usize) -> Option<&SectionContent> {
        self.content.get(&section)
    }

    pub fn panel(&self, section: usize) -> Option<&Panel> {
        self.content(section).and_then(|c| c.panel.as_ref())
    }

    pub fn backdrop(&self, section: usize) -> &Backdrop {
        self.content(section)
            .map(|c| &c.backdrop)
            .unwrap_or(&self.default_backdrop)
    }

    /// Starting pose for every entity.
    pub fn mount_pose(&self, viewport: ViewportClass) -> SectionTargets {
        self.table.lookup(0, viewport).merged(&self.mount)
    }

    pub fn shows_limited_edition(&self, section: usize) -> bool {
        self.limited_sections.contains(&section)
    }

    pub fn spins_in(&self, section: usize) -> bool {
        self.spin_section == Some(section)
    }

    /// Table totality plus range checks on every section reference.
    pub fn validate(&self) -> Result<(), TableError> {
        let total = self.total_sections;
        self.table.validate(total)?;

        let in_range = |section: usize| {
            if section < total {
                Ok(())
            } else {
                Err(TableError::OutOfRange { section, total })
            }
        };

        for (&section, content) in &self.content {
            in_range(section)?;
            if let Some(Panel::Continue { to, .. }) = &content.panel {
                in_range(*to)?;
            }
        }
        for &section in &self.limited_sections {
            in_range(section)?;
        }
        if let Some(section) = self.pinned_camera_section {
            in_range(section)?;
        }
        if let Some(section) = self.spin_section {
            in_range(section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FLAVORS;
    use crate::scene::presets;

    #[test]
    fn test_backdrop_resolves_variant_background() {
        let apple = &FLAVORS[1];
        assert_eq!(Backdrop::Variant.resolve(apple), apple.background());
        assert_eq!(
            Backdrop::Fixed("#4a4e69".into()).resolve(apple),
            Rgba { r: 0x4a, g: 0x4e, b: 0x69, a: 255 }
        );
    }

    #[test]
    fn test_unmatched_content_renders_nothing() {
        let layout = presets::extended();
        assert!(layout.panel(0).is_none());
        assert!(layout.panel(99).is_none());
        assert_eq!(layout.panel(2), Some(&Panel::Configurator));
    }

    #[test]
    fn test_mount_pose_falls_back_to_landing() {
        let mut layout = presets::extended();
        let mounted = layout.mount_pose(ViewportClass::Desktop);
        let title = mounted.get(crate::scene::EntityId::TitleText).map(|t| (t.position, t.opacity));
        assert_eq!(title, Some(([0.0, 0.0, -5.0], 0.0)));

        layout.mount = SectionTargets::default();
        assert_eq!(layout.mount_pose(ViewportClass::Desktop), layout.table.lookup(0, ViewportClass::Desktop));
    }

    #[test]
    fn test_validate_catches_bad_continue_target() {
        let mut layout = presets::extended();
        layout.content.insert(
            1,
            SectionContent {
                title: "Intro".into(),
                panel: Some(Panel::Continue { to: 40, label: "Go".into() }),
                backdrop: Backdrop::Variant,
            },
        );
        assert_eq!(layout.validate(), Err(TableError::OutOfRange { section: 40, total: 9 }));
    }
}
