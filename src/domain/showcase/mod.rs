//! Showcase module - the curated add-on catalog.

mod catalog;
mod item;

pub use catalog::{catalog, find_item};
pub use item::ShowcaseItem;
