//! JSON request/response shapes for the guest endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::guests::{AgeGroup, Guest, GuestSummary, RsvpStatus, Side};

/// Query string for the guest list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestListQuery {
    /// Exact RSVP match; omitted means all.
    pub rsvp: Option<RsvpStatus>,
    /// Case-insensitive substring search on the name.
    pub search: Option<String>,
}

/// Request to invite a guest. RSVP always starts Pendente.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuestRequest {
    pub name: String,
    pub age_group: AgeGroup,
    pub side: Side,
    pub table: Option<String>,
}

/// Request to update a guest. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub age_group: Option<AgeGroup>,
    pub side: Option<Side>,
    pub rsvp: Option<RsvpStatus>,
    pub table: Option<String>,
}

/// One guest as the API exposes it.
#[derive(Debug, Clone, Serialize)]
pub struct GuestResponse {
    pub id: String,
    pub name: String,
    pub age_group: AgeGroup,
    pub side: Side,
    pub rsvp: RsvpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id().to_string(),
            name: guest.name().to_string(),
            age_group: guest.age_group(),
            side: guest.side(),
            rsvp: guest.rsvp(),
            table: guest.table().map(str::to_string),
        }
    }
}

/// Guest list plus the headline counts over the full collection.
#[derive(Debug, Clone, Serialize)]
pub struct GuestListResponse {
    pub guests: Vec<GuestResponse>,
    pub summary: GuestSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_query_deserializes_from_portuguese_label() {
        let query: GuestListQuery = serde_urlencoded::from_str("rsvp=Confirmado").unwrap();
        assert_eq!(query.rsvp, Some(RsvpStatus::Confirmed));
    }

    #[test]
    fn response_serializes_portuguese_labels() {
        let guest = Guest::seeded("Ana Costa", AgeGroup::Child, Side::Shared, RsvpStatus::Pending);
        let json = serde_json::to_value(GuestResponse::from(&guest)).unwrap();
        assert_eq!(json["age_group"], "Criança");
        assert_eq!(json["side"], "Comum");
        assert_eq!(json["rsvp"], "Pendente");
    }
}
