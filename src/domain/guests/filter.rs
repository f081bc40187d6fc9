//! Pure filtering and summary counts for the guest list.

use serde::Serialize;

use super::{Guest, RsvpStatus};

/// Filter criteria for the guest list.
///
/// RSVP match and name search compose with logical AND; filtering is
/// pure and order-preserving.
#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    /// Exact RSVP match; `None` is the "Todos" wildcard.
    pub rsvp: Option<RsvpStatus>,
    /// Case-insensitive substring match on the guest name.
    pub search: Option<String>,
}

impl GuestFilter {
    /// Matches everyone.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one RSVP status.
    pub fn with_rsvp(mut self, rsvp: RsvpStatus) -> Self {
        self.rsvp = Some(rsvp);
        self
    }

    /// Restricts to names containing the term (case-insensitive).
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether a single guest passes the filter.
    pub fn matches(&self, guest: &Guest) -> bool {
        let rsvp_ok = self.rsvp.map_or(true, |rsvp| guest.rsvp() == rsvp);
        let search_ok = self.search.as_ref().map_or(true, |term| {
            guest.name().to_lowercase().contains(&term.to_lowercase())
        });
        rsvp_ok && search_ok
    }

    /// Applies the filter, preserving relative order.
    pub fn apply<'a>(&self, guests: &'a [Guest]) -> Vec<&'a Guest> {
        guests.iter().filter(|g| self.matches(g)).collect()
    }
}

/// Headline counts shown above the guest list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuestSummary {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub declined: usize,
}

impl GuestSummary {
    /// Derives the counts from the current collection.
    pub fn from_guests(guests: &[Guest]) -> Self {
        let count = |status: RsvpStatus| guests.iter().filter(|g| g.rsvp() == status).count();
        Self {
            total: guests.len(),
            confirmed: count(RsvpStatus::Confirmed),
            pending: count(RsvpStatus::Pending),
            declined: count(RsvpStatus::Declined),
        }
    }
}
