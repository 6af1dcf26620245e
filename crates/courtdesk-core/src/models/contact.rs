use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum ContactRole {
    #[serde(rename = "staff")]
    Staff,
    #[serde(rename = "organization")]
    Organization,
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "team")]
    Team,
    #[serde(rename = "venue")]
    Venue,
    #[serde(rename = "catering")]
    Catering,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl std::fmt::Display for ContactRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactRole::Staff => write!(f, "Staff"),
            ContactRole::Organization => write!(f, "Organization"),
            ContactRole::Hotel => write!(f, "Hotel"),
            ContactRole::Transport => write!(f, "Transport"),
            ContactRole::Team => write!(f, "Team"),
            ContactRole::Venue => write!(f, "Venue"),
            ContactRole::Catering => write!(f, "Catering"),
            ContactRole::Other => write!(f, "Other"),
        }
    }
}

/// Phone-book entry. A null tournament id marks a contact that travels with
/// the circuit rather than belonging to one stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Contact {
    pub id: String,
    #[serde(rename = "tournamentId", default)]
    pub tournament_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: ContactRole,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub telegram: String,
    #[serde(default)]
    pub notes: String,
}

impl Contact {
    pub fn is_global(&self) -> bool {
        self.tournament_id.is_none()
    }

    /// Visible for the given stop: its own contacts plus circuit-wide ones
    pub fn visible_for(&self, tournament_id: &str) -> bool {
        match &self.tournament_id {
            Some(id) => id == tournament_id,
            None => true,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || contains_ignore_case(&self.organization, query)
            || contains_ignore_case(&self.role.to_string(), query)
    }
}
