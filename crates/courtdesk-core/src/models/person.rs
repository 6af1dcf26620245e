use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

/// Staff records use this club code instead of a feed club code.
pub const STAFF_CLUB_CODE: &str = "STAFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum PersonRole {
    #[serde(rename = "team_manager")]
    TeamManager,
    #[serde(rename = "delegate")]
    Delegate,
    #[serde(rename = "head_coach")]
    HeadCoach,
    #[serde(rename = "assistant_coach")]
    AssistantCoach,
    #[default]
    #[serde(rename = "player")]
    Player,
    #[serde(rename = "physio")]
    Physio,
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "other")]
    Other,
    // League staff departments
    #[serde(rename = "staff_director")]
    StaffDirector,
    #[serde(rename = "staff_logistics")]
    StaffLogistics,
    #[serde(rename = "staff_operations")]
    StaffOperations,
    #[serde(rename = "staff_competition")]
    StaffCompetition,
    #[serde(rename = "staff_officiating")]
    StaffOfficiating,
    #[serde(rename = "staff_referee")]
    StaffReferee,
    #[serde(rename = "staff_media")]
    StaffMedia,
    #[serde(rename = "staff_commercial")]
    StaffCommercial,
    #[serde(rename = "staff_it")]
    StaffIt,
    #[serde(rename = "staff_other")]
    StaffOther,
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PersonRole::TeamManager => "Team Manager",
            PersonRole::Delegate => "Delegate",
            PersonRole::HeadCoach => "Head Coach",
            PersonRole::AssistantCoach => "Assistant Coach",
            PersonRole::Player => "Player",
            PersonRole::Physio => "Physio",
            PersonRole::Doctor => "Doctor",
            PersonRole::Other => "Other",
            PersonRole::StaffDirector => "Director",
            PersonRole::StaffLogistics => "Logistics",
            PersonRole::StaffOperations => "Operations",
            PersonRole::StaffCompetition => "Competition",
            PersonRole::StaffOfficiating => "Officiating",
            PersonRole::StaffReferee => "Referee Dept",
            PersonRole::StaffMedia => "Media",
            PersonRole::StaffCommercial => "Commercial",
            PersonRole::StaffIt => "IT",
            PersonRole::StaffOther => "Other",
        };
        write!(f, "{}", label)
    }
}

impl PersonRole {
    /// Roles the operator most often needs to reach in a hurry
    pub fn is_key_contact(&self) -> bool {
        matches!(
            self,
            PersonRole::TeamManager
                | PersonRole::Delegate
                | PersonRole::HeadCoach
                | PersonRole::Physio
                | PersonRole::Doctor
        )
    }

    pub fn is_staff_role(&self) -> bool {
        matches!(
            self,
            PersonRole::StaffDirector
                | PersonRole::StaffLogistics
                | PersonRole::StaffOperations
                | PersonRole::StaffCompetition
                | PersonRole::StaffOfficiating
                | PersonRole::StaffReferee
                | PersonRole::StaffMedia
                | PersonRole::StaffCommercial
                | PersonRole::StaffIt
                | PersonRole::StaffOther
        )
    }
}

/// One accredited person: players, team officials, and league staff alike.
/// Everything except the role is free text; empty string means unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Person {
    pub id: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(rename = "clubCode", default)]
    pub club_code: String,
    pub name: String,
    #[serde(default)]
    pub role: PersonRole,
    #[serde(default)]
    pub nationality: String,
    #[serde(rename = "passportNumber", default)]
    pub passport_number: String,
    #[serde(rename = "passportExpiry", default)]
    pub passport_expiry: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    // Travel
    #[serde(rename = "arrivalDate", default)]
    pub arrival_date: String,
    #[serde(rename = "arrivalTime", default)]
    pub arrival_time: String,
    #[serde(rename = "arrivalFlight", default)]
    pub arrival_flight: String,
    #[serde(rename = "departureDate", default)]
    pub departure_date: String,
    #[serde(rename = "departureTime", default)]
    pub departure_time: String,
    #[serde(rename = "departureFlight", default)]
    pub departure_flight: String,
    // Accommodation
    #[serde(default)]
    pub hotel: String,
    #[serde(rename = "roomNumber", default)]
    pub room_number: String,
    #[serde(rename = "roomType", default)]
    pub room_type: String,
    // Health & dietary
    #[serde(default)]
    pub allergies: String,
    #[serde(rename = "dietaryNeeds", default)]
    pub dietary_needs: String,
    #[serde(rename = "medicalNotes", default)]
    pub medical_notes: String,
    // Other
    #[serde(rename = "shirtSize", default)]
    pub shirt_size: String,
    #[serde(default)]
    pub notes: String,
}

impl Person {
    pub fn is_staff(&self) -> bool {
        self.club_code == STAFF_CLUB_CODE
    }

    pub fn is_key_contact(&self) -> bool {
        self.role.is_key_contact()
    }

    /// Free-text search across the fields shown in the people list
    pub fn matches_query(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || contains_ignore_case(&self.role.to_string(), query)
            || contains_ignore_case(&self.nationality, query)
            || contains_ignore_case(&self.notes, query)
    }

    /// Anything registered worth showing on the arrivals board?
    pub fn has_arrival(&self) -> bool {
        !self.arrival_date.is_empty() || !self.arrival_flight.is_empty()
    }

    pub fn has_departure(&self) -> bool {
        !self.departure_date.is_empty() || !self.departure_flight.is_empty()
    }
}

/// Builds a person with just the fields a test cares about set.
#[cfg(test)]
pub(crate) fn test_person(name: &str, club_code: &str, role: PersonRole) -> Person {
    Person {
        id: format!("p-{}", name.to_lowercase().replace(' ', "-")),
        tournament_id: "abu-dhabi-2026".to_string(),
        team_id: club_code.to_string(),
        club_code: club_code.to_string(),
        name: name.to_string(),
        role,
        nationality: String::new(),
        passport_number: String::new(),
        passport_expiry: String::new(),
        date_of_birth: String::new(),
        phone: String::new(),
        email: String::new(),
        whatsapp: String::new(),
        arrival_date: String::new(),
        arrival_time: String::new(),
        arrival_flight: String::new(),
        departure_date: String::new(),
        departure_time: String::new(),
        departure_flight: String::new(),
        hotel: String::new(),
        room_number: String::new(),
        room_type: String::new(),
        allergies: String::new(),
        dietary_needs: String::new(),
        medical_notes: String::new(),
        shirt_size: String::new(),
        notes: String::new(),
    }
}
