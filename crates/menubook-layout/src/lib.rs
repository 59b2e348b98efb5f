//! Book layout for menubook.
//!
//! Turns a menu catalog into fixed-capacity pages for a flip-book viewer:
//!
//! - **Pagination** - greedy packing of headings and items into pages,
//!   re-emitting a continuation heading when a category spans a page break
//! - **Capacity** - page capacity derived from the viewport width
//! - **Navigation** - clamped page flipping over the paginated book
//!
//! Everything here is pure: no I/O, no shared state, identical input gives
//! identical output.
//!
//! ```rust
//! use menubook_core::{Catalog, Item};
//! use menubook_layout::{capacity_for_width, paginate};
//!
//! let catalog = Catalog::new().with_category(
//!     "Drinks",
//!     vec![
//!         Item::new(1, "Tea", 2.0),
//!         Item::new(2, "Coffee", 3.0).with_description("Hot"),
//!     ],
//! );
//!
//! let pages = paginate(&catalog, &Default::default(), capacity_for_width(400));
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].len(), 3);
//! ```

mod capacity;
mod cost;
mod navigation;
mod paginator;
mod view;

pub use capacity::{CapacityEstimator, capacity_for_width};
pub use cost::UnitCosts;
pub use navigation::{BookNavigator, FlipDirection};
pub use paginator::{BookPaginator, Page, PageEntry, paginate};
pub use view::BookView;

// Re-export core types
pub use menubook_core::{Catalog, CategoryMeta, Item, LayoutConfig, MenuPayload};
