//! Layout configuration: unit costs and viewport breakpoints.

use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// Viewports narrower than `max_width` pixels get `capacity` units per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max_width: u32,
    pub capacity: u32,
}

impl Breakpoint {
    /// Create a new breakpoint.
    pub const fn new(max_width: u32, capacity: u32) -> Self {
        Self {
            max_width,
            capacity,
        }
    }
}

/// Configuration for book pagination.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "MenuError"))]
pub struct LayoutConfig {
    /// Units charged for a category heading.
    #[builder(default = "2")]
    #[serde(default = "default_heading_units")]
    pub heading_units: u32,

    /// Units charged for every item.
    #[builder(default = "2")]
    #[serde(default = "default_item_base_units")]
    pub item_base_units: u32,

    /// Extra units for an item with a description.
    #[builder(default = "1")]
    #[serde(default = "default_extra_units")]
    pub description_units: u32,

    /// Extra units for an item with an image.
    #[builder(default = "1")]
    #[serde(default = "default_extra_units")]
    pub image_units: u32,

    /// Width breakpoints, ordered by increasing `max_width`.
    #[builder(default = "default_breakpoints()")]
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<Breakpoint>,

    /// Capacity for viewports wider than every breakpoint.
    #[builder(default = "18")]
    #[serde(default = "default_wide_capacity")]
    pub wide_capacity: u32,
}

fn default_heading_units() -> u32 {
    2
}

fn default_item_base_units() -> u32 {
    2
}

fn default_extra_units() -> u32 {
    1
}

fn default_breakpoints() -> Vec<Breakpoint> {
    vec![Breakpoint::new(560, 10), Breakpoint::new(900, 13)]
}

fn default_wide_capacity() -> u32 {
    18
}

impl From<derive_builder::UninitializedFieldError> for MenuError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        MenuError::invalid_config(err.to_string())
    }
}

impl LayoutConfigBuilder {
    fn validate(&self) -> Result<(), MenuError> {
        check(
            self.heading_units,
            self.item_base_units,
            self.breakpoints.as_deref(),
        )
    }
}

fn check(
    heading_units: Option<u32>,
    item_base_units: Option<u32>,
    breakpoints: Option<&[Breakpoint]>,
) -> Result<(), MenuError> {
    if heading_units == Some(0) {
        return Err(MenuError::invalid_config("Heading cost must be at least 1 unit"));
    }
    if item_base_units == Some(0) {
        return Err(MenuError::invalid_config("Item base cost must be at least 1 unit"));
    }
    if let Some(breakpoints) = breakpoints {
        if breakpoints.windows(2).any(|w| w[0].max_width >= w[1].max_width) {
            return Err(MenuError::invalid_config(
                "Breakpoints must be strictly increasing in width",
            ));
        }
    }
    Ok(())
}

impl LayoutConfig {
    /// Create a new layout config builder.
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }

    /// Check a config that did not come through the builder.
    pub fn validate(&self) -> MenuResult<()> {
        check(
            Some(self.heading_units),
            Some(self.item_base_units),
            Some(self.breakpoints.as_slice()),
        )
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MenuError::io(path, e))?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            heading_units: default_heading_units(),
            item_base_units: default_item_base_units(),
            description_units: default_extra_units(),
            image_units: default_extra_units(),
            breakpoints: default_breakpoints(),
            wide_capacity: default_wide_capacity(),
        }
    }
}
