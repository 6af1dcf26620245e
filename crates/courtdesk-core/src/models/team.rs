use serde::{Deserialize, Serialize};

use crate::models::person::STAFF_CLUB_CODE;
use crate::utils::format::format_display_date;

/// Per-delegation logistics sheet: where a club (or the staff group) sleeps,
/// when it lands, and what the kitchen needs to know.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct TeamInfo {
    pub id: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    #[serde(rename = "clubCode")]
    pub club_code: String,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(default)]
    pub group: String,
    #[serde(rename = "arrivalDate", default)]
    pub arrival_date: String,
    #[serde(rename = "departureDate", default)]
    pub departure_date: String,
    #[serde(default)]
    pub hotel: String,
    #[serde(rename = "flightInfo", default)]
    pub flight_info: String,
    #[serde(rename = "dietaryNotes", default)]
    pub dietary_notes: String,
    #[serde(default)]
    pub notes: String,
}

impl TeamInfo {
    pub fn is_staff_sheet(&self) -> bool {
        self.club_code == STAFF_CLUB_CODE
    }

    /// "Fri, Feb 27 → Sun, Mar 1", tolerating a missing side
    pub fn stay_range(&self) -> String {
        match (self.arrival_date.is_empty(), self.departure_date.is_empty()) {
            (true, true) => "TBD".to_string(),
            (false, true) => format!("{} → ?", format_display_date(&self.arrival_date)),
            (true, false) => format!("? → {}", format_display_date(&self.departure_date)),
            (false, false) => format!(
                "{} → {}",
                format_display_date(&self.arrival_date),
                format_display_date(&self.departure_date)
            ),
        }
    }
}
