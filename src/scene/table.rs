//! Section Target Table.
//!
//! A data-driven lookup `(section, viewport) → SectionTargets`. Each section
//! holds a full desktop bundle plus mobile overrides for the entities whose
//! values differ on small screens. Sections with no entry resolve to an
//! explicit fallback bundle (neutral pose by default), never to another
//! section's values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EntityId, EntityTarget, SectionTargets, ViewportClass};

/// Bundles for one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub desktop: SectionTargets,
    /// Entities that differ on mobile; everything else uses `desktop`.
    #[serde(default)]
    pub mobile: SectionTargets,
}

impl SectionEntry {
    pub fn new(desktop: SectionTargets) -> Self {
        Self { desktop, mobile: SectionTargets::default() }
    }

    pub fn on_mobile(mut self, entity: EntityId, target: EntityTarget) -> Self {
        self.mobile.insert(entity, target);
        self
    }

    fn resolve(&self, viewport: ViewportClass) -> SectionTargets {
        match viewport {
            ViewportClass::Desktop => self.desktop.clone(),
            ViewportClass::Mobile => self.desktop.merged(&self.mobile),
        }
    }
}

/// Totality failures found by [`SectionTargetTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("layout declares no sections")]
    NoSections,
    #[error("section {section} has no target entry")]
    MissingSection { section: usize },
    #[error("section {section} ({viewport:?}) has no bundle for `{entity}`")]
    MissingEntity { section: usize, viewport: ViewportClass, entity: EntityId },
    #[error("fallback bundle has no entry for `{0}`")]
    IncompleteFallback(EntityId),
    #[error("section {section} is outside 0..{total}")]
    OutOfRange { section: usize, total: usize },
    #[error("text entity `{entity}` in section {section} has no typography")]
    MissingText { section: usize, entity: EntityId },
}

/// `Map<Section, Map<Viewport, Bundle>>` with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTargetTable {
    pub sections: BTreeMap<usize, SectionEntry>,
    #[serde(default = "SectionTargets::neutral")]
    pub fallback: SectionTargets,
}

impl Default for SectionTargetTable {
    fn default() -> Self {
        Self { sections: BTreeMap::new(), fallback: SectionTargets::neutral() }
    }
}

impl SectionTargetTable {
    pub fn with_section(mut self, section: usize, entry: SectionEntry) -> Self {
        self.sections.insert(section, entry);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fresh bundle for `section` on `viewport`.
    pub fn lookup(&self, section: usize, viewport: ViewportClass) -> SectionTargets {
        match self.sections.get(&section) {
            Some(entry) => entry.resolve(viewport),
            None => {
                if cfg!(debug_assertions) {
                    log::warn!("No target entry for section {section}; using fallback bundle");
                }
                self.fallback.clone()
            }
        }
    }

    /// Check that every section in `0..total` resolves to a complete
    /// bundle on both viewports, and that nothing lies outside the range.
    pub fn validate(&self, total: usize) -> Result<(), TableError> {
        if total == 0 {
            return Err(TableError::NoSections);
        }
        if let Some(entity) = self.fallback.missing() {
            return Err(TableError::IncompleteFallback(entity));
        }
        if let Some(&section) = self.sections.keys().find(|&&s| s >= total) {
            return Err(TableError::OutOfRange { section, total });
        }
        for section in 0..total {
            let entry = self
                .sections
                .get(&section)
                .ok_or(TableError::MissingSection { section })?;
            for viewport in [ViewportClass::Desktop, ViewportClass::Mobile] {
                let bundle = entry.resolve(viewport);
                if let Some(entity) = bundle.missing() {
                    return Err(TableError::MissingEntity { section, viewport, entity });
                }
                for (entity, target) in bundle.iter() {
                    if entity.is_text() && target.text.is_none() {
                        return Err(TableError::MissingText { section, entity: *entity });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(y: f32) -> SectionTargets {
        let mut t = SectionTargets::neutral();
        t.insert(EntityId::CanGroup, EntityTarget::at([0.0, y, 2.5]));
        t
    }

    #[test]
    fn test_lookup_mobile_merges_overrides() {
        let table = SectionTargetTable::default().with_section(
            0,
            SectionEntry::new(full(7.0))
                .on_mobile(EntityId::Logo, EntityTarget::at([0.0, 2.0, 0.0]).scaled(0.5)),
        );
        let desktop = table.lookup(0, ViewportClass::Desktop);
        let mobile = table.lookup(0, ViewportClass::Mobile);
        assert_eq!(desktop.get(EntityId::Logo).map(|t| t.scale[0]), Some(1.0));
        assert_eq!(mobile.get(EntityId::Logo).map(|t| t.scale[0]), Some(0.5));
        assert_eq!(mobile.get(EntityId::CanGroup), desktop.get(EntityId::CanGroup));
    }

    #[test]
    fn test_unmatched_section_uses_explicit_fallback() {
        let table = SectionTargetTable::default().with_section(0, SectionEntry::new(full(7.0)));
        assert_eq!(table.lookup(42, ViewportClass::Desktop), SectionTargets::neutral());
    }

    #[test]
    fn test_validate_reports_missing_section() {
        let table = SectionTargetTable::default()
            .with_section(0, SectionEntry::new(full(7.0)))
            .with_section(2, SectionEntry::new(full(0.0)));
        assert_eq!(table.validate(3), Err(TableError::MissingSection { section: 1 }));
    }

    #[test]
    fn test_validate_reports_missing_entity() {
        let partial: SectionTargets = full(0.0)
            .iter()
            .filter(|(id, _)| **id != EntityId::Logo)
            .map(|(id, t)| (*id, t.clone()))
            .collect();
        let table = SectionTargetTable::default().with_section(0, SectionEntry::new(partial));
        assert_eq!(
            table.validate(1),
            Err(TableError::MissingEntity {
                section: 0,
                viewport: ViewportClass::Desktop,
                entity: EntityId::Logo,
            })
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_entry() {
        let table = SectionTargetTable::default()
            .with_section(0, SectionEntry::new(full(0.0)))
            .with_section(5, SectionEntry::new(full(0.0)));
        assert_eq!(table.validate(1), Err(TableError::OutOfRange { section: 5, total: 1 }));
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"{
            "sections": {
                "0": {
                    "desktop": {
                        "can_group": { "position": [0, 7, 2.5], "scale": [1.1, 1.1, 1.1] },
                        "limited_can_group": { "position": [0, 0, 0], "scale": [0, 0, 0] },
                        "title_text": { "position": [0, 0, -2], "text": { "content": "FOLIA", "font_size": 4 } },
                        "description_text": { "position": [0, -1, -10], "opacity": 0,
                                              "text": { "content": "", "font_size": 0.4, "max_width": 12 } },
                        "logo": { "position": [0, 3, 0], "opacity": 0 }
                    },
                    "mobile": {
                        "title_text": { "position": [0, 0, -2], "text": { "content": "FOLIA", "font_size": 2.5 } }
                    }
                }
            }
        }"#;
        let table = SectionTargetTable::from_json(json)
            .unwrap_or_else(|e| panic!("Expected valid table JSON: {e}"));
        assert_eq!(table.validate(1), Ok(()));
        let mobile = table.lookup(0, ViewportClass::Mobile);
        assert_eq!(
            mobile.get(EntityId::TitleText).and_then(|t| t.text.as_ref()).map(|t| t.font_size),
            Some(2.5)
        );
    }
}
