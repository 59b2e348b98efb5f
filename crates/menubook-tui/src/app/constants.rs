//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Hint shown when the menu spans several pages.
pub const MULTI_PAGE_HINT: &str = "This menu has multiple pages. Use flip buttons to see more.";
