use serde::{Deserialize, Serialize};

use crate::utils::time_sort_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum TransferStatus {
    #[default]
    #[serde(rename = "scheduled")]
    Scheduled,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferStatus::Scheduled => write!(f, "Scheduled"),
            TransferStatus::InProgress => write!(f, "In Progress"),
            TransferStatus::Completed => write!(f, "Completed"),
            TransferStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A stored transfer row. Dates are "YYYY-MM-DD", times "HH:MM"; empty
/// strings mean "not set yet" (drivers and times are usually assigned the
/// day before).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Transfer {
    pub id: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "fromLocation")]
    pub from_location: String,
    #[serde(rename = "toLocation")]
    pub to_location: String,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<String>,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "driverName", default)]
    pub driver_name: String,
    #[serde(rename = "driverPhone", default)]
    pub driver_phone: String,
    #[serde(rename = "vehicleInfo", default)]
    pub vehicle_info: String,
    #[serde(default)]
    pub pax: i32,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub notes: String,
}

/// A transfer that hasn't been persisted yet (no id). This is what the plan
/// generator emits and what inserts send to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct NewTransfer {
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "fromLocation")]
    pub from_location: String,
    #[serde(rename = "toLocation")]
    pub to_location: String,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<String>,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "driverName", default)]
    pub driver_name: String,
    #[serde(rename = "driverPhone", default)]
    pub driver_phone: String,
    #[serde(rename = "vehicleInfo", default)]
    pub vehicle_info: String,
    #[serde(default)]
    pub pax: i32,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub notes: String,
}

impl Transfer {
    /// "From → To" for list rows and previews
    pub fn route(&self) -> String {
        format!("{} → {}", self.from_location, self.to_location)
    }

    /// Who rides: the subject field holds either one label ("EL Staff",
    /// "Zalgiris") or a comma-separated list of names. Empty when the ride
    /// isn't tied to anyone, which the schedule shows as a staff ride.
    pub fn passenger_names(&self) -> Vec<String> {
        self.team_name
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Key used to spot an already-scheduled leg: same subject, same day,
    /// same purpose.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.team_name, &self.date, &self.notes)
    }

    /// Sort key: by day, then by time with unset times last
    pub fn chrono_key(&self) -> (&str, &str) {
        (&self.date, time_sort_key(&self.time))
    }
}

impl NewTransfer {
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.team_name, &self.date, &self.notes)
    }

    /// Attach a backend-assigned id, turning the draft into a stored row
    pub fn with_id(self, id: String) -> Transfer {
        Transfer {
            id,
            tournament_id: self.tournament_id,
            date: self.date,
            time: self.time,
            from_location: self.from_location,
            to_location: self.to_location,
            team_id: self.team_id,
            team_name: self.team_name,
            driver_name: self.driver_name,
            driver_phone: self.driver_phone,
            vehicle_info: self.vehicle_info,
            pax: self.pax,
            status: self.status,
            notes: self.notes,
        }
    }
}
