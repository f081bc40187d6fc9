//! Event (wedding) configuration

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ValidationError;

/// Details of the wedding the dashboard is tracking
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// Couple name shown in headers and the countdown
    #[serde(default = "default_couple_name")]
    pub couple_name: String,

    /// Wedding date, `YYYY-MM-DD`
    #[serde(default = "default_wedding_date")]
    pub wedding_date: String,

    /// Venue name
    #[serde(default = "default_venue_name")]
    pub venue_name: String,
}

impl EventConfig {
    /// Wedding date parsed as a calendar date
    pub fn wedding_date(&self) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(&self.wedding_date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidWeddingDate)
    }

    /// Validate event configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.couple_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EVENT__COUPLE_NAME"));
        }
        self.wedding_date()?;
        Ok(())
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            couple_name: default_couple_name(),
            wedding_date: default_wedding_date(),
            venue_name: default_venue_name(),
        }
    }
}

fn default_couple_name() -> String {
    "Ana & Pedro".to_string()
}

fn default_wedding_date() -> String {
    "2024-12-14".to_string()
}

fn default_venue_name() -> String {
    "Indaiá Eventos".to_string()
}
