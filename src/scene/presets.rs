//! Hand-authored layouts.
//!
//! Section-to-section deltas here are creative values, not computed ones.
//! `extended` is the nine-page Folia site; `classic` is the shorter
//! six-page cut with mobile alternates for the logo and typography.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::layout::{Backdrop, Layout, Panel, SectionContent};
use super::table::{SectionEntry, SectionTargetTable};
use super::{EntityId, EntityTarget, SectionTargets};
use crate::tween::Vec3;

/// Built-in layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    #[default]
    Extended,
    Classic,
}

impl LayoutPreset {
    pub fn build(self) -> Layout {
        match self {
            LayoutPreset::Extended => extended(),
            LayoutPreset::Classic => classic(),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "extended" => Some(LayoutPreset::Extended),
            "classic" => Some(LayoutPreset::Classic),
            _ => None,
        }
    }
}

const TAGLINE: &str = "Folia is a new wave of sparkling botanical water. We believe in the \
power of pure, simple ingredients to restore balance and awaken the senses. Each can is a \
moment of clarity: crisp, clean, and endlessly refreshing.";

/// Per-section values for the five entities, desktop first.
struct Stage {
    can: EntityTarget,
    limited: EntityTarget,
    title: EntityTarget,
    description: EntityTarget,
    logo: EntityTarget,
}

impl Stage {
    fn into_targets(self) -> SectionTargets {
        [
            (EntityId::CanGroup, self.can),
            (EntityId::LimitedCanGroup, self.limited),
            (EntityId::TitleText, self.title),
            (EntityId::DescriptionText, self.description),
            (EntityId::Logo, self.logo),
        ]
        .into_iter()
        .collect()
    }
}

fn can(position: Vec3, scale: f32, rotation: Vec3) -> EntityTarget {
    EntityTarget::at(position).scaled(scale).rotated(rotation)
}

fn title(position: Vec3, opacity: f32, font_size: f32) -> EntityTarget {
    EntityTarget::at(position).faded(opacity).with_text("FOLIA", font_size, None)
}

fn description(opacity: f32, duration_ms: u64) -> EntityTarget {
    EntityTarget::at([0.0, -1.0, -10.0])
        .faded(opacity)
        .with_text(TAGLINE, 0.4, Some(12.0))
        .lasting(duration_ms)
}

/// Pose entities take when the scene first mounts: title and tagline
/// pushed back and invisible, products at unit scale.
fn mount() -> SectionTargets {
    Stage {
        can: EntityTarget::at([0.0, 7.0, 2.5]),
        limited: EntityTarget::at([2.5, 0.0, 0.8]),
        title: title([0.0, 0.0, -5.0], 0.0, 4.0),
        description: description(0.0, 500),
        logo: EntityTarget::at([0.0, 3.0, 0.0]).faded(0.0),
    }
    .into_targets()
}

fn content(title: &str, panel: Option<Panel>, backdrop: Backdrop) -> SectionContent {
    SectionContent { title: title.to_string(), panel, backdrop }
}

fn fixed(hex: &str) -> Backdrop {
    Backdrop::Fixed(hex.to_string())
}

/// Nine sections: landing, story, flavors, four product turns,
/// limited edition, find-us.
pub fn extended() -> Layout {
    let hidden_limited = || EntityTarget::hidden([0.0, 0.0, 0.0]);
    let no_logo = || EntityTarget::at([0.0, 3.0, 0.0]).faded(0.0);
    let faded_title = || title([0.0, 0.0, 0.0], 0.0, 4.0);

    let stages = [
        Stage {
            can: can([0.0, 7.0, 2.5], 1.1, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 0.0, -2.0], 1.0, 4.0),
            description: description(0.0, 500),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 7.0, 2.5], 1.1, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 2.0, -2.0], 1.0, 2.0),
            description: description(1.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 0.0, 2.5], 1.1, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 0.0, -2.0], 0.2, 4.0),
            description: description(0.0, 500),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 0.0, 4.0], 1.2, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 0.0, 4.0], 1.2, [0.0, 2.1, 0.0]),
            limited: hidden_limited(),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 0.0, 4.0], 1.2, [0.0, 4.0, 0.0]),
            limited: hidden_limited(),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([0.0, 0.0, 4.0], 1.1, [6.0, 0.3, 0.3]),
            limited: hidden_limited(),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([2.8, 5.0, 1.5], 1.2, [0.0, 0.0, 0.0]),
            limited: can([-0.1, 0.0, 3.0], 1.1, [0.0, 0.2, 0.0]),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
        Stage {
            can: can([2.8, 5.0, 1.5], 1.2, [0.0, 0.0, 0.0]),
            limited: EntityTarget::hidden([-10.0, 0.0, 3.0]).rotated([0.0, 0.2, 0.0]),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        },
    ];

    let table = stages
        .into_iter()
        .enumerate()
        .fold(SectionTargetTable::default(), |table, (i, stage)| {
            table.with_section(i, SectionEntry::new(stage.into_targets()))
        });

    let content = BTreeMap::from([
        (0, content("Welcome", None, fixed("#a8d8b9"))),
        (
            1,
            content(
                "Our Story",
                Some(Panel::Continue { to: 2, label: "Explore the Collection".into() }),
                fixed("#bbdc51"),
            ),
        ),
        (2, content("Flavors", Some(Panel::Configurator), Backdrop::Variant)),
        (3, content("Lifestyle", Some(Panel::Lifestyle), Backdrop::Variant)),
        (4, content("Our Process", Some(Panel::About), Backdrop::Variant)),
        (5, content("Detail", None, Backdrop::Variant)),
        (6, content("Teaser", None, Backdrop::Variant)),
        (7, content("Limited Edition", Some(Panel::LimitedEdition), fixed("#f25287"))),
        (8, content("Find Us", Some(Panel::CallToAction), fixed("#2d3047"))),
    ]);

    Layout {
        name: "extended".into(),
        total_sections: 9,
        table,
        content,
        pinned_camera_section: Some(7),
        limited_sections: BTreeSet::from([6, 7, 8]),
        spin_section: Some(7),
        default_backdrop: fixed("#4a4e69"),
        initial_background: "#b6b2bf".into(),
        mount: mount(),
    }
}

/// Six sections: landing, about, flavors, lifestyle, limited edition,
/// call to action. Logo and typography have mobile alternates.
pub fn classic() -> Layout {
    let hidden_limited = || EntityTarget::hidden([0.0, 0.0, 0.0]);
    let no_logo = || EntityTarget::at([0.0, 3.0, 0.0]).faded(0.0);
    let faded_title = || title([0.0, 0.0, 0.0], 0.0, 4.0);

    let landing = SectionEntry::new(
        Stage {
            can: can([0.0, 0.2, 2.5], 1.1, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 0.6, -2.0], 1.0, 4.0),
            description: description(0.0, 500),
            logo: EntityTarget::at([0.0, 2.6, 0.0]),
        }
        .into_targets(),
    )
    .on_mobile(EntityId::TitleText, title([0.0, 0.6, -2.0], 1.0, 2.2))
    .on_mobile(EntityId::Logo, EntityTarget::at([0.0, 2.2, 0.0]).scaled(0.6));

    let about = SectionEntry::new(
        Stage {
            can: can([2.2, 0.0, 2.5], 1.0, [0.0, -0.4, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 2.0, -2.0], 1.0, 2.0),
            description: EntityTarget::at([0.0, -0.2, -4.0])
                .with_text(TAGLINE, 0.4, Some(12.0))
                .lasting(2000),
            logo: no_logo(),
        }
        .into_targets(),
    )
    .on_mobile(EntityId::CanGroup, can([0.0, -1.6, 2.5], 0.8, [0.0, -0.4, 0.0]))
    .on_mobile(EntityId::TitleText, title([0.0, 2.0, -2.0], 1.0, 1.4))
    .on_mobile(
        EntityId::DescriptionText,
        EntityTarget::at([0.0, 0.2, -4.0])
            .with_text(TAGLINE, 0.3, Some(6.0))
            .lasting(2000),
    );

    let flavors = SectionEntry::new(
        Stage {
            can: can([0.0, 0.0, 2.5], 1.1, [0.0, 0.3, 0.0]),
            limited: hidden_limited(),
            title: title([0.0, 0.0, -2.0], 0.2, 4.0),
            description: description(0.0, 500),
            logo: no_logo(),
        }
        .into_targets(),
    )
    .on_mobile(EntityId::TitleText, title([0.0, 0.0, -2.0], 0.2, 2.4));

    let lifestyle = SectionEntry::new(
        Stage {
            can: can([0.0, 0.0, 4.0], 1.2, [0.0, 2.1, 0.0]),
            limited: hidden_limited(),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        }
        .into_targets(),
    );

    let limited = SectionEntry::new(
        Stage {
            can: can([2.8, 5.0, 1.5], 1.2, [0.0, 0.0, 0.0]),
            limited: can([-0.1, 0.0, 3.0], 1.1, [0.0, 0.2, 0.0]),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: no_logo(),
        }
        .into_targets(),
    )
    .on_mobile(EntityId::LimitedCanGroup, can([0.0, 0.0, 3.0], 0.9, [0.0, 0.2, 0.0]));

    let call_to_action = SectionEntry::new(
        Stage {
            can: can([-2.2, 0.4, 1.5], 1.0, [0.0, 0.6, 0.0]),
            limited: can([2.2, 0.4, 1.5], 1.0, [0.0, -0.6, 0.0]),
            title: faded_title(),
            description: description(0.0, 2000),
            logo: EntityTarget::at([0.0, 2.4, 0.0]).scaled(0.8),
        }
        .into_targets(),
    )
    .on_mobile(EntityId::CanGroup, can([-1.0, 1.2, 1.5], 0.7, [0.0, 0.6, 0.0]))
    .on_mobile(EntityId::LimitedCanGroup, can([1.0, 1.2, 1.5], 0.7, [0.0, -0.6, 0.0]))
    .on_mobile(EntityId::Logo, EntityTarget::at([0.0, 2.6, 0.0]).scaled(0.5));

    let table = SectionTargetTable::default()
        .with_section(0, landing)
        .with_section(1, about)
        .with_section(2, flavors)
        .with_section(3, lifestyle)
        .with_section(4, limited)
        .with_section(5, call_to_action);

    let content = BTreeMap::from([
        (0, content("Welcome", None, fixed("#a8d8b9"))),
        (
            1,
            content(
                "About",
                Some(Panel::Continue { to: 2, label: "Explore the Collection".into() }),
                fixed("#bbdc86"),
            ),
        ),
        (2, content("Flavors", Some(Panel::Configurator), Backdrop::Variant)),
        (3, content("Lifestyle", Some(Panel::Lifestyle), Backdrop::Variant)),
        (4, content("Limited Edition", Some(Panel::LimitedEdition), fixed("#f25287"))),
        (5, content("Find Us", Some(Panel::CallToAction), fixed("#2d3047"))),
    ]);

    Layout {
        name: "classic".into(),
        total_sections: 6,
        table,
        content,
        pinned_camera_section: Some(4),
        limited_sections: BTreeSet::from([4, 5]),
        spin_section: Some(4),
        default_backdrop: fixed("#4a4e69"),
        initial_background: "#b6b2bf".into(),
        mount: mount(),
    }
}
