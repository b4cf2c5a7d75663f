//! Content Catalog: product variants (flavors)
//!
//! Pure data: a static, immutable list of variants with their color tokens,
//! texture path and descriptive content. Selection of the active variant is
//! a separate piece of state ([`VariantSelection`]) that never touches
//! section navigation.

mod flavors;

pub use flavors::{FLAVORS, LIMITED_EDITION};

use std::collections::HashSet;

use crate::color::{try_parse_hex, Rgba};

/// One ingredient line on the configurator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub name: &'static str,
    pub description: &'static str,
}

/// Nutrition facts, kept as display strings ("3g").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: &'static str,
    pub sugar: &'static str,
    pub carbohydrates: &'static str,
}

/// Hex color tokens for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Can/label accent color
    pub primary: &'static str,
    /// Scene background while the variant is on stage
    pub background: &'static str,
    /// Panel text color
    pub text: &'static str,
}

/// A selectable product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub id: &'static str,
    pub display_name: &'static str,
    pub colors: ColorTokens,
    pub texture_path: &'static str,
    pub ingredients: &'static [Ingredient],
    pub nutrition: Nutrition,
}

impl Variant {
    pub fn primary(&self) -> Rgba {
        try_parse_hex(self.colors.primary).unwrap_or(Rgba::BLACK)
    }

    pub fn background(&self) -> Rgba {
        try_parse_hex(self.colors.background).unwrap_or(Rgba::BLACK)
    }

    pub fn text_color(&self) -> Rgba {
        try_parse_hex(self.colors.text).unwrap_or(Rgba::WHITE)
    }
}

/// Problems found when checking a catalog at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no selectable variants")]
    Empty,
    #[error("variant id `{0}` appears more than once")]
    DuplicateId(&'static str),
    #[error("variant `{id}` has malformed color token `{token}`")]
    BadColor { id: &'static str, token: &'static str },
}

/// The immutable variant list plus the limited-edition model's variant.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    variants: &'static [Variant],
    limited: &'static Variant,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(FLAVORS, &LIMITED_EDITION)
    }
}

impl Catalog {
    pub fn new(variants: &'static [Variant], limited: &'static Variant) -> Self {
        Self { variants, limited }
    }

    pub fn variants(&self) -> &'static [Variant] {
        self.variants
    }

    /// Variant shown on the secondary (limited edition) model.
    pub fn limited_edition(&self) -> &'static Variant {
        self.limited
    }

    pub fn get(&self, id: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Check id uniqueness and color tokens.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.variants.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for v in self.variants.iter().chain(std::iter::once(self.limited)) {
            if !seen.insert(v.id) {
                return Err(CatalogError::DuplicateId(v.id));
            }
            for token in [v.colors.primary, v.colors.background, v.colors.text] {
                if try_parse_hex(token).is_none() {
                    return Err(CatalogError::BadColor { id: v.id, token });
                }
            }
        }
        Ok(())
    }
}

/// Active variant id, owned next to (not inside) the orchestrator.
#[derive(Debug, Clone)]
pub struct VariantSelection {
    active: &'static str,
}

impl VariantSelection {
    /// Start on the first catalog entry.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active: catalog.variants().first().map(|v| v.id).unwrap_or_default(),
        }
    }

    pub fn active_id(&self) -> &'static str {
        self.active
    }

    /// Resolve the active variant, falling back to the first entry.
    pub fn active(&self, catalog: &Catalog) -> &'static Variant {
        catalog
            .get(self.active)
            .unwrap_or_else(|| &catalog.variants()[0])
    }

    /// Switch the active variant. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(v) if v.id == self.active => false,
            Some(v) => {
                log::info!("Variant: {} -> {}", self.active, v.id);
                self.active = v.id;
                true
            }
            None => {
                log::warn!("Unknown variant id: {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.variants().len(), 4);
        assert!(catalog.get("limited").is_none());
    }

    #[test]
    fn test_selection_defaults_to_first() {
        let catalog = Catalog::default();
        let sel = VariantSelection::new(&catalog);
        assert_eq!(sel.active_id(), "blackberry");
        assert_eq!(sel.active(&catalog).display_name, "Wild Blackberry");
    }

    #[test]
    fn test_select_known_and_unknown() {
        let catalog = Catalog::default();
        let mut sel = VariantSelection::new(&catalog);
        assert!(sel.select(&catalog, "apple"));
        assert!(!sel.select(&catalog, "apple"));
        assert!(!sel.select(&catalog, "durian"));
        assert_eq!(sel.active_id(), "apple");
    }

    #[test]
    fn test_limited_edition_not_selectable() {
        let catalog = Catalog::default();
        let mut sel = VariantSelection::new(&catalog);
        assert!(!sel.select(&catalog, catalog.limited_edition().id));
        assert_eq!(sel.active_id(), "blackberry");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        static DUP: [Variant; 2] = [FLAVORS[0], FLAVORS[0]];
        let catalog = Catalog::new(&DUP, &LIMITED_EDITION);
        assert_eq!(catalog.validate(), Err(CatalogError::DuplicateId("blackberry")));
    }
}
