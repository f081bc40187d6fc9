//! JSON shapes for the showcase endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::budget::Category;
use crate::domain::showcase::ShowcaseItem;

/// Query string for the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowcaseListQuery {
    /// Exact category match; omitted means all.
    pub category: Option<Category>,
}

/// One catalog entry, flagged with whether it is already in the budget.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseItemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// List price in reais.
    pub price: f64,
    pub price_label: String,
    pub image: String,
    /// True once the entry was converted into an expense.
    pub added: bool,
}

impl ShowcaseItemResponse {
    pub fn from_item(item: &ShowcaseItem, added: bool) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category,
            price: item.price.as_reais(),
            price_label: item.price.format_brl(),
            image: item.image.clone(),
            added,
        }
    }
}
