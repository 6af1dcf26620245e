use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum EventType {
    #[serde(rename = "game")]
    Game,
    #[serde(rename = "meal")]
    Meal,
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "meeting")]
    Meeting,
    #[serde(rename = "arrival")]
    Arrival,
    #[serde(rename = "departure")]
    Departure,
    #[serde(rename = "practice")]
    Practice,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Game => write!(f, "Game"),
            EventType::Meal => write!(f, "Meal"),
            EventType::Transfer => write!(f, "Transfer"),
            EventType::Meeting => write!(f, "Meeting"),
            EventType::Arrival => write!(f, "Arrival"),
            EventType::Departure => write!(f, "Departure"),
            EventType::Practice => write!(f, "Practice"),
            EventType::Other => write!(f, "Other"),
        }
    }
}

/// One row of the day programme: meals, meetings, practices, anything the
/// operator wants on the schedule that isn't a stored transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct DailyEvent {
    pub id: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "endTime", default)]
    pub end_time: String,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<String>,
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

impl DailyEvent {
    /// "18:00–19:30", "18:00", or "TBD"
    pub fn time_range(&self) -> String {
        match (self.time.is_empty(), self.end_time.is_empty()) {
            (true, _) => "TBD".to_string(),
            (false, true) => self.time.clone(),
            (false, false) => format!("{}–{}", self.time, self.end_time),
        }
    }

    /// "Zalgiris · Court 2", either half optional
    pub fn context_line(&self) -> String {
        match (self.team_name.is_empty(), self.location.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.team_name.clone(),
            (true, false) => self.location.clone(),
            (false, false) => format!("{} · {}", self.team_name, self.location),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_event(date: &str, time: &str, event_type: EventType, title: &str) -> DailyEvent {
    DailyEvent {
        id: format!("e-{}", title.to_lowercase().replace(' ', "-")),
        tournament_id: "abu-dhabi-2026".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        end_time: String::new(),
        event_type,
        title: title.to_string(),
        description: String::new(),
        team_id: None,
        team_name: String::new(),
        location: String::new(),
        notes: String::new(),
    }
}
