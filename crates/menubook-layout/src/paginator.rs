//! Greedy book pagination.
//!
//! Categories are walked in catalog order and their items in list order.
//! Each entry is appended to the current page while it fits in the remaining
//! unit budget; otherwise the page is closed and a fresh one started. When a
//! category's items cross a page break, the new page opens with a
//! continuation heading for that category.
//!
//! Capacity is a packing target rather than a hard ceiling: an entry that
//! does not fit an *empty* page is placed anyway, so every heading and item
//! lands on some page and pagination always terminates. A page can therefore
//! overshoot the capacity by at most one entry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use menubook_core::{Catalog, CategoryMeta, Item, LayoutConfig, MenuPayload};

use crate::cost::UnitCosts;

/// A renderable entry on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageEntry {
    /// Category heading. `continued` marks a repeat after a page break.
    Heading {
        label: String,
        continued: bool,
        description: String,
        image_url: String,
    },
    /// A menu item.
    Item { item: Item },
}

impl PageEntry {
    fn heading(label: &str, meta: &CategoryMeta, continued: bool) -> Self {
        Self::Heading {
            label: label.to_string(),
            continued,
            description: meta.description_or_empty().to_string(),
            image_url: meta.image_url_or_empty().to_string(),
        }
    }

    /// Whether this entry is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    /// The item, if this entry is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item { item } => Some(item),
            Self::Heading { .. } => None,
        }
    }
}

/// One screen of the flip book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    entries: Vec<PageEntry>,
}

impl Page {
    /// Entries in display order.
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items on this page, skipping headings.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().filter_map(PageEntry::as_item)
    }
}

impl std::ops::Index<usize> for Page {
    type Output = PageEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Page under construction.
#[derive(Debug, Default)]
enum PageState {
    #[default]
    Empty,
    Accumulating { entries: Vec<PageEntry>, used: u64 },
}

/// Accumulates entries into pages for a fixed capacity.
#[derive(Debug)]
struct PageBuilder {
    capacity: u64,
    pages: Vec<Page>,
    state: PageState,
}

impl PageBuilder {
    fn new(capacity: u32) -> Self {
        Self {
            capacity: u64::from(capacity),
            pages: Vec::new(),
            state: PageState::Empty,
        }
    }

    /// An empty page accepts anything; otherwise the cost must fit the budget.
    fn fits(&self, cost: u32) -> bool {
        match &self.state {
            PageState::Empty => true,
            PageState::Accumulating { used, .. } => used + u64::from(cost) <= self.capacity,
        }
    }

    fn push(&mut self, entry: PageEntry, cost: u32) {
        match &mut self.state {
            PageState::Empty => {
                self.state = PageState::Accumulating {
                    entries: vec![entry],
                    used: u64::from(cost),
                };
            }
            PageState::Accumulating { entries, used } => {
                entries.push(entry);
                *used += u64::from(cost);
            }
        }
    }

    fn flush(&mut self) {
        if let PageState::Accumulating { entries, used } = std::mem::take(&mut self.state) {
            trace!(page = self.pages.len(), entries = entries.len(), used, "page closed");
            self.pages.push(Page { entries });
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.flush();
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        self.pages
    }
}

/// Packs a catalog into pages using a unit cost model.
#[derive(Debug, Clone, Default)]
pub struct BookPaginator {
    costs: UnitCosts,
}

impl BookPaginator {
    /// Create a paginator with the default cost model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator using the costs from a layout config.
    pub fn with_config(config: &LayoutConfig) -> Self {
        Self {
            costs: UnitCosts::from_config(config),
        }
    }

    /// Cost model in use.
    pub fn costs(&self) -> &UnitCosts {
        &self.costs
    }

    /// Paginate a catalog.
    ///
    /// Categories without items are skipped. The result is never empty: a
    /// catalog with nothing to show yields a single empty page.
    pub fn paginate(
        &self,
        categories: &Catalog,
        category_meta: &IndexMap<String, CategoryMeta>,
        capacity: u32,
    ) -> Vec<Page> {
        let empty_meta = CategoryMeta::default();
        let heading_cost = self.costs.heading();
        let mut builder = PageBuilder::new(capacity);

        for (label, items) in categories.iter() {
            if items.is_empty() {
                continue;
            }

            let meta = category_meta.get(label).unwrap_or(&empty_meta);

            if !builder.fits(heading_cost) {
                builder.flush();
            }
            builder.push(PageEntry::heading(label, meta, false), heading_cost);

            for item in items {
                let cost = self.costs.item(item);
                if !builder.fits(cost) {
                    builder.flush();
                    builder.push(PageEntry::heading(label, meta, true), heading_cost);
                }
                builder.push(PageEntry::Item { item: item.clone() }, cost);
            }
        }

        let pages = builder.finish();
        debug!(
            categories = categories.len(),
            items = categories.item_count(),
            capacity,
            pages = pages.len(),
            "paginated catalog"
        );
        pages
    }

    /// Paginate a public menu payload.
    pub fn paginate_menu(&self, menu: &MenuPayload, capacity: u32) -> Vec<Page> {
        self.paginate(&menu.categories, &menu.category_meta, capacity)
    }
}

/// Paginate with the default cost model.
pub fn paginate(
    categories: &Catalog,
    category_meta: &IndexMap<String, CategoryMeta>,
    capacity: u32,
) -> Vec<Page> {
    BookPaginator::new().paginate(categories, category_meta, capacity)
}
