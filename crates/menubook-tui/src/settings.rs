//! Persisted viewer settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Approximate width of one terminal cell in CSS pixels.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

/// Settings read from `settings.toml` in the user's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Force a theme instead of following the menu's template.
    pub theme: Option<String>,
    /// Pixels per terminal column when estimating the viewport width.
    pub cell_width_px: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            theme: None,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
        }
    }
}

impl ViewerSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("menubook").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file; missing or malformed files give defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Viewport width in pixels for a terminal `columns` wide.
    pub fn width_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width_px.max(1))
    }
}
