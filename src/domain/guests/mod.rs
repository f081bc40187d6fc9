//! Guest module - invitees and their RSVP lifecycle.

mod filter;
mod guest;

pub use filter::{GuestFilter, GuestSummary};
pub use guest::{AgeGroup, Guest, RsvpStatus, Side};
