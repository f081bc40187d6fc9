//! Guest entity and RSVP lifecycle.
//!
//! A guest always starts Pending. The toggle cycles
//! Pending → Confirmed → Declined → Confirmed → ...; Pending is only
//! ever entered at creation. That asymmetry is the intended behavior,
//! not an oversight.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::GuestId;

/// RSVP status of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpStatus {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Confirmado")]
    Confirmed,
    #[serde(rename = "Recusado")]
    Declined,
}

impl RsvpStatus {
    /// The next status in the toggle cycle.
    pub fn toggled(self) -> RsvpStatus {
        match self {
            RsvpStatus::Pending => RsvpStatus::Confirmed,
            RsvpStatus::Confirmed => RsvpStatus::Declined,
            RsvpStatus::Declined => RsvpStatus::Confirmed,
        }
    }
}

/// Age group of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "Adulto")]
    Adult,
    #[serde(rename = "Criança")]
    Child,
    #[serde(rename = "Bebê")]
    Infant,
}

/// Which side of the couple invited the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "Noiva")]
    Bride,
    #[serde(rename = "Noivo")]
    Groom,
    #[serde(rename = "Comum")]
    Shared,
}

/// An invitee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier.
    id: GuestId,

    /// Full name.
    name: String,

    /// Age group.
    age_group: AgeGroup,

    /// Inviting side.
    side: Side,

    /// RSVP status.
    rsvp: RsvpStatus,

    /// Free-text table label; no table registry exists to validate it.
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
}

impl Guest {
    /// Creates a new guest, always Pending.
    pub fn new(name: impl Into<String>, age_group: AgeGroup, side: Side) -> Self {
        Self {
            id: GuestId::new(),
            name: name.into(),
            age_group,
            side,
            rsvp: RsvpStatus::Pending,
            table: None,
        }
    }

    /// Creates a seeded guest with a known status.
    pub fn seeded(name: impl Into<String>, age_group: AgeGroup, side: Side, rsvp: RsvpStatus) -> Self {
        Self {
            id: GuestId::new(),
            name: name.into(),
            age_group,
            side,
            rsvp,
            table: None,
        }
    }

    /// Returns the guest id.
    pub fn id(&self) -> &GuestId {
        &self.id
    }

    /// Returns the full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age group.
    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    /// Returns the inviting side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the RSVP status.
    pub fn rsvp(&self) -> RsvpStatus {
        self.rsvp
    }

    /// Returns the table label, if assigned.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Renames the guest.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the age group.
    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.age_group = age_group;
    }

    /// Changes the inviting side.
    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    /// Sets the RSVP status directly (used by full updates).
    pub fn set_rsvp(&mut self, rsvp: RsvpStatus) {
        self.rsvp = rsvp;
    }

    /// Assigns or clears the table label.
    pub fn set_table(&mut self, table: Option<String>) {
        self.table = table;
    }

    /// Advances the RSVP status one step along the cycle.
    pub fn toggle_rsvp(&mut self) {
        self.rsvp = self.rsvp.toggled();
    }
}
