//! Page capacity from viewport width.

use menubook_core::{Breakpoint, LayoutConfig};

/// Step function from viewport width (pixels) to page capacity (units).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityEstimator {
    breakpoints: Vec<Breakpoint>,
    wide_capacity: u32,
}

impl CapacityEstimator {
    /// Create an estimator with the default breakpoints.
    pub fn new() -> Self {
        Self::with_config(&LayoutConfig::default())
    }

    /// Create an estimator from a layout config.
    pub fn with_config(config: &LayoutConfig) -> Self {
        Self {
            breakpoints: config.breakpoints.clone(),
            wide_capacity: config.wide_capacity,
        }
    }

    /// Capacity for a viewport `width_px` pixels wide.
    pub fn capacity_for_width(&self, width_px: u32) -> u32 {
        self.breakpoints
            .iter()
            .find(|bp| width_px < bp.max_width)
            .map_or(self.wide_capacity, |bp| bp.capacity)
    }
}

impl Default for CapacityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Capacity for a viewport width using the default breakpoints.
pub fn capacity_for_width(width_px: u32) -> u32 {
    CapacityEstimator::new().capacity_for_width(width_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps() {
        assert_eq!(capacity_for_width(0), 10);
        assert_eq!(capacity_for_width(559), 10);
        assert_eq!(capacity_for_width(560), 13);
        assert_eq!(capacity_for_width(899), 13);
        assert_eq!(capacity_for_width(900), 18);
        assert_eq!(capacity_for_width(u32::MAX), 18);
    }

    #[test]
    fn test_custom_breakpoints() {
        let config = LayoutConfig::builder()
            .breakpoints(vec![Breakpoint::new(400, 6)])
            .wide_capacity(12u32)
            .build()
            .unwrap();
        let estimator = CapacityEstimator::with_config(&config);

        assert_eq!(estimator.capacity_for_width(399), 6);
        assert_eq!(estimator.capacity_for_width(400), 12);
    }
}
