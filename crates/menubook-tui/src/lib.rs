//! Terminal flip-book viewer for menubook.
//!
//! Shows a restaurant's public menu one page at a time, the way the web
//! viewer does, with pages sized to the terminal width.
//!
//! # Usage
//!
//! ```rust,no_run
//! use menubook_core::MenuPayload;
//!
//! let menu = MenuPayload::load("menu.json").unwrap();
//! menubook_tui::run(menu).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `l`/`→`/`Space` - Flip to the next page
//! - `h`/`←` - Flip to the previous page
//! - `g`/`G` - First/last page
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod settings;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use settings::ViewerSettings;
pub use theme::Theme;

use menubook_core::{LayoutConfig, MenuPayload};

/// Configuration for the viewer.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Pagination and breakpoint settings.
    pub layout: LayoutConfig,
    /// Persisted viewer settings.
    pub settings: ViewerSettings,
}

impl TuiConfig {
    /// Create a config with default layout and settings loaded from disk.
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            settings: ViewerSettings::load(),
        }
    }

    /// Use a custom layout config.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Run the viewer with default configuration.
pub fn run(menu: MenuPayload) -> AppResult<()> {
    run_with_config(menu, TuiConfig::new())
}

/// Run the viewer with custom configuration.
pub fn run_with_config(menu: MenuPayload, config: TuiConfig) -> AppResult<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let (columns, _) = crossterm::terminal::size()?;
    let terminal = ratatui::init();
    let result = rt.block_on(App::new(menu, config, columns).run(terminal));
    ratatui::restore();

    result
}
