//! Menu item and category metadata types.

use std::fmt;

use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a menu item.
///
/// The backend sends either numeric or string ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub CompactString);

impl ItemId {
    /// Create a new item id.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_item_id_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ItemId {
                fn from(id: $ty) -> Self {
                    Self(id.to_compact_string())
                }
            }
        )*
    };
}

impl_item_id_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Float(f64),
            Text(CompactString),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_compact_string()),
            RawId::Signed(n) => Self(n.to_compact_string()),
            RawId::Float(n) => Self(n.to_compact_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional image (URL or data URL).
    #[serde(default)]
    pub image_url: Option<String>,
    /// Price in the restaurant's currency.
    pub price: f64,
}

impl Item {
    /// Create a new item with no description or image.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image_url: None,
            price,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether the item has a non-empty description.
    pub fn has_description(&self) -> bool {
        non_empty(&self.description).is_some()
    }

    /// Whether the item has a non-empty image.
    pub fn has_image(&self) -> bool {
        non_empty(&self.image_url).is_some()
    }

    /// Description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Image URL, if present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    /// Price formatted with two decimals.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Per-category presentation metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// Optional category description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional cover image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CategoryMeta {
    /// Create metadata from optional fields.
    pub fn new(description: Option<String>, image_url: Option<String>) -> Self {
        Self {
            description,
            image_url,
        }
    }

    /// Description, or an empty string when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Image URL, or an empty string when absent.
    pub fn image_url_or_empty(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_flags() {
        let item = Item::new(1, "Tea", 2.0);
        assert!(!item.has_description());
        assert!(!item.has_image());

        let item = item.with_description("").with_image("data:image/png;base64,AAA");
        assert!(!item.has_description());
        assert!(item.has_image());
        assert_eq!(item.description(), None);
    }

    #[test]
    fn test_item_id_from_number_and_string() {
        let item: Item =
            serde_json::from_str(r#"{"id": 7, "name": "Soup", "price": 4.5}"#).unwrap();
        assert_eq!(item.id.as_str(), "7");
        assert_eq!(item.description, None);

        let item: Item = serde_json::from_str(
            r#"{"id": "a1b2", "name": "Soup", "price": 4.5, "description": null}"#,
        )
        .unwrap();
        assert_eq!(item.id, ItemId::from("a1b2"));
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_price_label() {
        assert_eq!(Item::new(1, "Tea", 2.0).price_label(), "2.00");
        assert_eq!(Item::new(1, "Tea", 12.5).price_label(), "12.50");
    }

    #[test]
    fn test_category_meta_defaults() {
        let meta = CategoryMeta::default();
        assert_eq!(meta.description_or_empty(), "");
        assert_eq!(meta.image_url_or_empty(), "");
    }
}
