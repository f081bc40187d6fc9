//! Expense entity - one budget line item.
//!
//! # Invariants
//!
//! - `paid` never exceeds `amount`: every mutator clamps, so a
//!   well-formed expense cannot report more paid than committed.
//! - Only custom (user-added) expenses may be deleted; seeded contract
//!   items are permanent. The flag is set at construction and never
//!   changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpenseId, Money};

use super::Category;

/// A budget line item with a committed and a paid amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    id: ExpenseId,

    /// Category of the investment.
    category: Category,

    /// Display name.
    name: String,

    /// Total committed amount.
    amount: Money,

    /// Amount already paid (always <= amount).
    paid: Money,

    /// Optional payment due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,

    /// Optional free-text note.
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,

    /// True for user-added items; gates deletion.
    custom: bool,
}

impl Expense {
    /// Creates a new user-added expense with nothing paid yet.
    pub fn new(name: impl Into<String>, category: Category, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            name: name.into(),
            amount,
            paid: Money::ZERO,
            due_date: None,
            note: None,
            custom: true,
        }
    }

    /// Creates a seeded contract item (not deletable).
    pub fn seeded(name: impl Into<String>, category: Category, amount: Money, paid: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            name: name.into(),
            amount,
            paid: paid.min(amount),
            due_date: None,
            note: None,
            custom: false,
        }
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// Returns the expense id.
    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    /// Returns the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the committed amount.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the amount already paid.
    pub fn paid(&self) -> Money {
        self.paid
    }

    /// Returns the due date, if any.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// True for user-added items.
    pub fn is_custom(&self) -> bool {
        self.custom
    }

    /// True once the full amount has been paid.
    pub fn is_paid(&self) -> bool {
        self.paid >= self.amount
    }

    /// Amount still outstanding.
    pub fn remaining(&self) -> Money {
        self.amount.saturating_sub(self.paid)
    }

    // ─────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────

    /// Renames the expense.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the category.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Sets the committed amount, re-clamping `paid` to the new ceiling.
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.paid = self.paid.min(amount);
    }

    /// Sets the paid amount, clamped to [0, amount].
    pub fn set_paid(&mut self, paid: Money) {
        self.paid = paid.min(self.amount);
    }

    /// Sets or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Sets or clears the note.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Two-state payment toggle: fully paid flips back to nothing paid,
    /// anything less flips to fully paid.
    pub fn toggle_paid(&mut self) {
        if self.is_paid() {
            self.paid = Money::ZERO;
        } else {
            self.paid = self.amount;
        }
    }
}
