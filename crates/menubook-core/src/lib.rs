//! Core types for menubook.
//!
//! This crate provides the menu data model shared by the layout engine and
//! the viewer: items, categories with their metadata, the public menu
//! payload, template styles, and the layout configuration.

mod catalog;
mod config;
mod error;
mod item;
mod template;

pub use catalog::{Catalog, MenuPayload};
pub use config::{Breakpoint, LayoutConfig, LayoutConfigBuilder};
pub use error::{MenuError, MenuResult};
pub use item::{CategoryMeta, Item, ItemId};
pub use template::{PreviewTemplate, TemplateStyle};
