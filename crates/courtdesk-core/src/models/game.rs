//! Read-only mirror of the public games feed. Field set matches the feed
//! payloads; the dashboard never writes these.

use serde::{Deserialize, Serialize};

use crate::utils::format::{format_local_date, format_local_time};
use crate::utils::teams::display_name;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSeason {
    pub name: String,
    pub code: String,
    pub alias: String,
    #[serde(rename = "competitionCode")]
    pub competition_code: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameGroup {
    pub id: String,
    pub order: i32,
    pub name: String,
    #[serde(rename = "rawName")]
    pub raw_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePhaseType {
    pub code: String,
    pub alias: String,
    pub name: String,
    #[serde(rename = "isGroupPhase")]
    pub is_group_phase: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubImages {
    #[serde(default)]
    pub crest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClub {
    pub code: String,
    pub name: String,
    #[serde(rename = "abbreviatedName")]
    pub abbreviated_name: String,
    #[serde(rename = "editorialName")]
    pub editorial_name: String,
    #[serde(rename = "tvCode")]
    pub tv_code: String,
    #[serde(rename = "isVirtual", default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub images: Option<ClubImages>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePartials {
    #[serde(rename = "partials1")]
    pub partials1: i32,
    #[serde(rename = "partials2")]
    pub partials2: i32,
    #[serde(rename = "partials3")]
    pub partials3: i32,
    #[serde(rename = "partials4")]
    pub partials4: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSide {
    pub club: GameClub,
    #[serde(default)]
    pub score: i32,
    #[serde(rename = "standingsScore", default)]
    pub standings_score: i32,
    #[serde(default)]
    pub partials: Option<GamePartials>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameVenue {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub identifier: String,
    #[serde(rename = "gameCode")]
    pub game_code: i32,
    pub season: GameSeason,
    pub group: GameGroup,
    #[serde(rename = "phaseType")]
    pub phase_type: GamePhaseType,
    pub round: i32,
    #[serde(rename = "roundAlias")]
    pub round_alias: String,
    #[serde(rename = "roundName")]
    pub round_name: String,
    pub played: bool,
    pub date: String,
    #[serde(rename = "confirmedDate")]
    pub confirmed_date: bool,
    #[serde(rename = "confirmedHour")]
    pub confirmed_hour: bool,
    #[serde(rename = "localTimeZone")]
    pub local_time_zone: i32,
    #[serde(rename = "localDate")]
    pub local_date: String,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    pub local: GameSide,
    pub road: GameSide,
    #[serde(default)]
    pub audience: i32,
    pub venue: GameVenue,
    #[serde(rename = "gameStatus", default)]
    pub game_status: String,
    #[serde(default)]
    pub winner: Option<String>,
}

impl Game {
    /// Home side display name (editorial name with dashboard overrides)
    pub fn home_name(&self) -> String {
        display_name(&self.local.club.editorial_name).to_string()
    }

    /// Road side display name
    pub fn away_name(&self) -> String {
        display_name(&self.road.club.editorial_name).to_string()
    }

    /// Calendar date at the venue ("YYYY-MM-DD")
    pub fn venue_date(&self) -> String {
        format_local_date(&self.utc_date, self.local_time_zone as i64)
    }

    /// Tip-off time at the venue ("HH:MM"), empty if the feed date is broken
    pub fn venue_time(&self) -> String {
        format_local_time(&self.utc_date, self.local_time_zone as i64)
    }

    /// Whether the subject plays in this game, matched on display names
    pub fn involves(&self, subject: &str) -> bool {
        self.home_name() == subject || self.away_name() == subject
    }

    /// "86 - 79" once the game is played
    pub fn score_line(&self) -> Option<String> {
        if self.played {
            Some(format!("{} - {}", self.local.score, self.road.score))
        } else {
            None
        }
    }

    /// "Zalgiris vs R. Madrid"
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_name(), self.away_name())
    }
}

// Feed list envelopes

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesPage {
    pub data: Vec<Game>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub code: String,
    pub name: String,
    #[serde(rename = "abbreviatedName")]
    pub abbreviated_name: String,
    #[serde(rename = "editorialName")]
    pub editorial_name: String,
    #[serde(rename = "tvCode")]
    pub tv_code: String,
    #[serde(rename = "isVirtual", default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub images: Option<ClubImages>,
    #[serde(default)]
    pub country: Option<ClubCountry>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubCountry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubsPage {
    pub data: Vec<Club>,
    pub total: i64,
}

impl Club {
    pub fn display_name(&self) -> String {
        display_name(&self.editorial_name).to_string()
    }
}

/// Builds a feed game for tests elsewhere in the crate; the club fields are
/// derived from the editorial name since that's all the dashboard matches on.
#[cfg(test)]
pub(crate) fn test_game(id: &str, utc_date: &str, tz: i32, home: &str, away: &str) -> Game {
    let club = |name: &str| GameClub {
        code: name.to_uppercase(),
        name: name.to_string(),
        abbreviated_name: name.to_string(),
        editorial_name: name.to_string(),
        tv_code: name.chars().take(3).collect(),
        is_virtual: false,
        images: None,
    };
    Game {
        id: id.to_string(),
        identifier: id.to_string(),
        game_code: 1,
        season: GameSeason {
            name: "ANGT 2025-26".to_string(),
            code: "JTA25".to_string(),
            alias: "JTA25".to_string(),
            competition_code: "JT".to_string(),
            year: 2025,
        },
        group: GameGroup {
            id: "g-a".to_string(),
            order: 1,
            name: "Group A".to_string(),
            raw_name: "GROUP A".to_string(),
        },
        phase_type: GamePhaseType {
            code: "RS".to_string(),
            alias: "regular".to_string(),
            name: "Regular Season".to_string(),
            is_group_phase: true,
        },
        round: 1,
        round_alias: "R1".to_string(),
        round_name: "Round 1".to_string(),
        played: false,
        date: utc_date.to_string(),
        confirmed_date: true,
        confirmed_hour: true,
        local_time_zone: tz,
        local_date: String::new(),
        utc_date: utc_date.to_string(),
        local: GameSide {
            club: club(home),
            score: 0,
            standings_score: 0,
            partials: None,
        },
        road: GameSide {
            club: club(away),
            score: 0,
            standings_score: 0,
            partials: None,
        },
        audience: 0,
        venue: GameVenue {
            name: "SPACE42 Arena".to_string(),
            code: "SPACE42".to_string(),
            capacity: 0,
            address: String::new(),
        },
        game_status: "scheduled".to_string(),
        winner: None,
    }
}
