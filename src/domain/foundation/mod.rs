//! Shared value objects used across the domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{ChatMessageId, ExpenseId, GuestId, ShowcaseItemId};
pub use money::Money;
pub use timestamp::Timestamp;
