//! Page flipping over a paginated book.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

/// Direction of the last flip, used by views to pick an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FlipDirection {
    #[default]
    Next,
    Prev,
}

/// Clamped page index over a book. Never wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookNavigator {
    current: usize,
    count: usize,
    direction: FlipDirection,
}

impl BookNavigator {
    /// Create a navigator on the first page. A count of 0 is treated as 1.
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            count: page_count.max(1),
            direction: FlipDirection::Next,
        }
    }

    /// Current page index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.count
    }

    /// Direction of the most recent flip.
    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    /// Flip forward, stopping at the last page.
    pub fn next(&mut self) {
        self.direction = FlipDirection::Next;
        self.current = (self.current + 1).min(self.max_index());
        debug!(page = self.current, "flip next");
    }

    /// Flip back, stopping at the first page.
    pub fn prev(&mut self) {
        self.direction = FlipDirection::Prev;
        self.current = self.current.saturating_sub(1);
        debug!(page = self.current, "flip prev");
    }

    /// Jump to the first page.
    pub fn first(&mut self) {
        self.direction = FlipDirection::Prev;
        self.current = 0;
    }

    /// Jump to the last page.
    pub fn last(&mut self) {
        self.direction = FlipDirection::Next;
        self.current = self.max_index();
    }

    /// Whether the first page is showing.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the last page is showing.
    pub fn is_last(&self) -> bool {
        self.current >= self.max_index()
    }

    /// Start over on page 0 of a re-paginated book.
    pub fn reset(&mut self, page_count: usize) {
        self.count = page_count.max(1);
        self.current = 0;
    }

    /// Human-readable position, e.g. "Page 2 of 5".
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current + 1, self.count)
    }
}

impl Default for BookNavigator {
    fn default() -> Self {
        Self::new(1)
    }
}
