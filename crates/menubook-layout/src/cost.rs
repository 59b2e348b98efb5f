//! Unit cost model used to decide page breaks.

use menubook_core::{Item, LayoutConfig};

/// Abstract sizing costs for page entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCosts {
    pub heading: u32,
    pub item_base: u32,
    pub description: u32,
    pub image: u32,
}

impl UnitCosts {
    /// Costs taken from a layout config.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            heading: config.heading_units,
            item_base: config.item_base_units,
            description: config.description_units,
            image: config.image_units,
        }
    }

    /// Cost of a category heading.
    pub fn heading(&self) -> u32 {
        self.heading
    }

    /// Cost of an item: base, plus extras for description and image.
    pub fn item(&self, item: &Item) -> u32 {
        let mut units = self.item_base;
        if item.has_description() {
            units = units.saturating_add(self.description);
        }
        if item.has_image() {
            units = units.saturating_add(self.image);
        }
        units
    }
}

impl Default for UnitCosts {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
