//! Menu catalog and the public menu payload.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MenuError, MenuResult};
use crate::item::{CategoryMeta, Item};
use crate::template::{PreviewTemplate, TemplateStyle};

static EMPTY_META: CategoryMeta = CategoryMeta {
    description: None,
    image_url: None,
};

/// Ordered mapping from category name to its items.
///
/// Iteration order is the order categories were supplied in; it is never
/// re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<Item>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or replace the items of an existing one in place.
    pub fn insert(&mut self, category: impl Into<String>, items: Vec<Item>) -> Option<Vec<Item>> {
        self.categories.insert(category.into(), items)
    }

    /// Builder-style variant of [`Catalog::insert`].
    pub fn with_category(mut self, category: impl Into<String>, items: Vec<Item>) -> Self {
        self.insert(category, items);
        self
    }

    /// Items for a category.
    pub fn get(&self, category: &str) -> Option<&[Item]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterate categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.categories
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of categories, including empty ones.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// All items, category by category.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.values().flatten()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Item>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Item>)>>(iter: I) -> Self {
        Self {
            categories: iter
                .into_iter()
                .map(|(name, items)| (name.into(), items))
                .collect(),
        }
    }
}

/// Public menu as returned by the backend for one restaurant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Catalog,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_meta: IndexMap<String, CategoryMeta>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub template_style_id: Option<String>,
    #[serde(default)]
    pub template_asset_url: Option<String>,
    #[serde(default)]
    pub template_asset_type: Option<String>,
}

impl MenuPayload {
    /// Create a payload from a catalog with no metadata.
    pub fn new(restaurant_name: impl Into<String>, categories: Catalog) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            categories,
            ..Self::default()
        }
    }

    /// Parse a payload from JSON, keeping category order.
    pub fn from_json(json: &str) -> MenuResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a payload from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MenuError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Metadata for a category; missing entries read as empty.
    pub fn meta(&self, category: &str) -> &CategoryMeta {
        self.category_meta.get(category).unwrap_or(&EMPTY_META)
    }

    /// Resolved visual style (style id, then template id, then default).
    pub fn style(&self) -> TemplateStyle {
        let id = [&self.template_style_id, &self.template_id]
            .into_iter()
            .filter_map(|id| id.as_deref())
            .find(|id| !id.is_empty())
            .unwrap_or_default();
        TemplateStyle::from_id(id)
    }

    /// Whether the menu should be drawn over an uploaded background image.
    ///
    /// Only the style id counts here; a template id of `custom-upload` alone
    /// does not select an uploaded background.
    pub fn has_custom_background(&self) -> bool {
        self.template_style_id.as_deref() == Some(TemplateStyle::CustomUpload.id())
            && self.template_asset_type.as_deref() == Some("image")
            && self
                .template_asset_url
                .as_deref()
                .is_some_and(|url| !url.is_empty())
    }

    /// Override the template with a preview selection.
    ///
    /// A stored template matching `preview_id` wins; otherwise a built-in
    /// style id is applied directly. Unknown ids leave the payload untouched.
    pub fn apply_preview(&mut self, preview_id: &str, stored: Option<&PreviewTemplate>) {
        if preview_id.is_empty() {
            return;
        }

        match stored {
            Some(template) if template.id == preview_id => {
                self.template_id = Some(template.id.clone());
                if let Some(style_id) = present(&template.style_id) {
                    self.template_style_id = Some(style_id.to_string());
                }
                if let Some(url) = present(&template.asset_url) {
                    self.template_asset_url = Some(url.to_string());
                }
                if let Some(kind) = present(&template.asset_type) {
                    self.template_asset_type = Some(kind.to_string());
                }
            }
            _ if TemplateStyle::is_built_in(preview_id) => {
                self.template_id = Some(preview_id.to_string());
                self.template_style_id = Some(preview_id.to_string());
            }
            _ => {}
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
