//! Showcase item - an immutable catalog entry.

use serde::Serialize;

use crate::domain::budget::{Category, Expense};
use crate::domain::foundation::{Money, ShowcaseItemId};

/// Note attached to expenses created from the showcase.
pub const SHOWCASE_NOTE: &str = "Adicionado via Vitrine Indaiá";

/// A read-only catalog entry, convertible into an expense.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseItem {
    /// Catalog identifier.
    pub id: ShowcaseItemId,
    /// Display title.
    pub title: String,
    /// Marketing description.
    pub description: String,
    /// Budget category the item lands in.
    pub category: Category,
    /// List price.
    pub price: Money,
    /// Illustration URL.
    pub image: String,
}

impl ShowcaseItem {
    /// Converts the item into a fresh budget line item: the price
    /// becomes the committed amount, nothing is paid yet, and the
    /// result is custom (deletable).
    pub fn to_expense(&self) -> Expense {
        Expense::new(self.title.clone(), self.category, self.price).with_note(SHOWCASE_NOTE)
    }
}
