//! Budget module - expense line items and their filters.

mod category;
mod expense;
mod filter;

pub use category::Category;
pub use expense::Expense;
pub use filter::ExpenseFilter;
