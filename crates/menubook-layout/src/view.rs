//! A paginated menu plus its page position.

use tracing::debug;

use menubook_core::{LayoutConfig, MenuPayload};

use crate::capacity::CapacityEstimator;
use crate::navigation::BookNavigator;
use crate::paginator::{BookPaginator, Page};

/// Menu, its pages for the current viewport, and the page being shown.
///
/// Pages are recomputed whenever the menu or the capacity changes, and the
/// position always returns to the first page when that happens.
#[derive(Debug, Clone)]
pub struct BookView {
    menu: MenuPayload,
    paginator: BookPaginator,
    estimator: CapacityEstimator,
    capacity: u32,
    pages: Vec<Page>,
    navigator: BookNavigator,
}

impl BookView {
    /// Paginate a menu for a viewport `width_px` pixels wide.
    pub fn new(menu: MenuPayload, config: &LayoutConfig, width_px: u32) -> Self {
        let paginator = BookPaginator::with_config(config);
        let estimator = CapacityEstimator::with_config(config);
        let capacity = estimator.capacity_for_width(width_px);
        let pages = paginator.paginate_menu(&menu, capacity);
        let navigator = BookNavigator::new(pages.len());

        Self {
            menu,
            paginator,
            estimator,
            capacity,
            pages,
            navigator,
        }
    }

    /// React to a viewport resize. Returns true if the book was re-paginated.
    pub fn resize(&mut self, width_px: u32) -> bool {
        let capacity = self.estimator.capacity_for_width(width_px);
        if capacity == self.capacity {
            return false;
        }

        debug!(from = self.capacity, to = capacity, width_px, "capacity changed");
        self.capacity = capacity;
        self.repaginate();
        true
    }

    /// Replace the menu and start from the first page.
    pub fn set_menu(&mut self, menu: MenuPayload) {
        self.menu = menu;
        self.repaginate();
    }

    fn repaginate(&mut self) {
        self.pages = self.paginator.paginate_menu(&self.menu, self.capacity);
        self.navigator.reset(self.pages.len());
    }

    /// The menu being shown.
    pub fn menu(&self) -> &MenuPayload {
        &self.menu
    }

    /// Current page capacity in units.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// All pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page being shown.
    pub fn current_page(&self) -> &Page {
        // The paginator never returns an empty page list.
        &self.pages[self.navigator.current()]
    }

    /// Page position.
    pub fn navigator(&self) -> &BookNavigator {
        &self.navigator
    }

    /// Flip forward one page, staying on the last page.
    pub fn next(&mut self) {
        self.navigator.next();
    }

    /// Flip back one page, staying on the first page.
    pub fn prev(&mut self) {
        self.navigator.prev();
    }

    /// Jump to the first page.
    pub fn first(&mut self) {
        self.navigator.first();
    }

    /// Jump to the last page.
    pub fn last(&mut self) {
        self.navigator.last();
    }

    /// Whether there is more than one page to flip through.
    pub fn is_multi_page(&self) -> bool {
        self.pages.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menubook_core::{Catalog, Item};

    fn menu() -> MenuPayload {
        let items = (1..=6)
            .map(|i| Item::new(i, format!("Dish {i}"), 9.0).with_description("Tasty"))
            .collect();
        MenuPayload::new("Cafe", Catalog::new().with_category("Mains", items))
    }

    #[test]
    fn test_resize_repaginates_and_resets() {
        // 2 + 6 * 3 = 20 units.
        let mut view = BookView::new(menu(), &LayoutConfig::default(), 400);
        assert_eq!(view.capacity(), 10);
        assert_eq!(view.pages().len(), 3);

        view.next();
        assert_eq!(view.navigator().current(), 1);

        assert!(view.resize(1200));
        assert_eq!(view.capacity(), 18);
        assert_eq!(view.pages().len(), 2);
        assert_eq!(view.navigator().current(), 0);
    }

    #[test]
    fn test_resize_within_band_keeps_position() {
        let mut view = BookView::new(menu(), &LayoutConfig::default(), 400);
        view.next();

        assert!(!view.resize(500));
        assert_eq!(view.navigator().current(), 1);
    }

    #[test]
    fn test_set_menu_resets() {
        let mut view = BookView::new(menu(), &LayoutConfig::default(), 400);
        view.last();

        view.set_menu(MenuPayload::default());

        assert!(!view.is_multi_page());
        assert_eq!(view.navigator().current(), 0);
        assert!(view.current_page().is_empty());
    }

    #[test]
    fn test_flipping_stays_on_pages() {
        let single = MenuPayload::new(
            "Cafe",
            Catalog::new().with_category("Drinks", vec![Item::new(1, "Tea", 2.0)]),
        );
        let mut view = BookView::new(single, &LayoutConfig::default(), 1200);
        assert!(!view.is_multi_page());

        for _ in 0..3 {
            view.next();
        }
        view.last();
        assert_eq!(view.navigator().current(), 0);
        assert_eq!(view.current_page().items().count(), 1);

        view.prev();
        view.first();
        assert_eq!(view.navigator().current(), 0);

        let mut view = BookView::new(menu(), &LayoutConfig::default(), 400);
        for _ in 0..10 {
            view.next();
        }
        assert_eq!(view.navigator().current(), view.pages().len() - 1);
        assert!(view.navigator().is_last());
        assert!(!view.current_page().is_empty());
    }
}
