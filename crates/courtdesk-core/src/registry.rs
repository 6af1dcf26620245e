//! Static tournament registry: the season's stops, each stop's key places,
//! the practice-day schedule, and the knockout-Sunday slots.
//!
//! This data changes a few times per season at most, so it ships embedded in
//! the binary rather than living in the backend. Everything else (transfers,
//! people, tasks) references tournaments by `Tournament::id`.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::Tournament;
use crate::utils::contains_ignore_case;

/// Global registry, parsed once from the embedded JSON
static REGISTRY: OnceLock<RegistryData> = OnceLock::new();

const REGISTRY_JSON: &str = include_str!("data/tournaments.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    #[serde(rename = "venue")]
    Venue,
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "hospital")]
    Hospital,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "restaurant")]
    Restaurant,
    #[serde(rename = "airport")]
    Airport,
    #[serde(rename = "other")]
    Other,
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceKind::Venue => write!(f, "Venue"),
            PlaceKind::Hotel => write!(f, "Hotel"),
            PlaceKind::Hospital => write!(f, "Hospital"),
            PlaceKind::Transport => write!(f, "Transport"),
            PlaceKind::Restaurant => write!(f, "Restaurant"),
            PlaceKind::Airport => write!(f, "Airport"),
            PlaceKind::Other => write!(f, "Other"),
        }
    }
}

/// One entry of a stop's key-places directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "mapsUrl", default)]
    pub maps_url: String,
    #[serde(default)]
    pub notes: String,
}

/// Practice-day slot. Times stay empty until the organizer confirms them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSlot {
    pub date: String,
    #[serde(rename = "localTime", default)]
    pub local_time: String,
    #[serde(rename = "endTime", default)]
    pub end_time: String,
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    #[serde(rename = "clubCode", default)]
    pub club_code: String,
    #[serde(default)]
    pub venue: String,
}

/// Knockout-Sunday slot: tip-off times are fixed, matchups depend on the
/// group results so the feed only fills them in late.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutSlot {
    pub date: String,
    #[serde(rename = "localTime")]
    pub local_time: String,
    pub label: String,
    #[serde(default)]
    pub venue: String,
}

/// The four locations every generated transfer routes between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationNames {
    pub venue: String,
    pub airport: String,
    pub team_hotel: String,
    pub staff_hotel: String,
}

#[derive(Debug, Default, Deserialize)]
struct RegistryData {
    #[serde(default)]
    tournaments: Vec<Tournament>,
    #[serde(default)]
    places: HashMap<String, Vec<Place>>,
    #[serde(rename = "practiceSchedules", default)]
    practice_schedules: HashMap<String, Vec<PracticeSlot>>,
    #[serde(default)]
    knockouts: HashMap<String, Vec<KnockoutSlot>>,
}

fn data() -> &'static RegistryData {
    REGISTRY.get_or_init(|| match serde_json::from_str::<RegistryData>(REGISTRY_JSON) {
        Ok(data) => {
            debug!(
                tournaments = data.tournaments.len(),
                places = data.places.values().map(|v| v.len()).sum::<usize>(),
                "Loaded tournament registry"
            );
            data
        }
        Err(err) => {
            warn!(error = %err, "Embedded tournament registry failed to parse");
            RegistryData::default()
        }
    })
}

/// Parse the embedded registry eagerly. Optional; every accessor loads it
/// on first use anyway.
pub fn init() {
    let _ = data();
}

pub fn all_tournaments() -> &'static [Tournament] {
    &data().tournaments
}

pub fn tournament(id: &str) -> Option<&'static Tournament> {
    data().tournaments.iter().find(|t| t.id == id)
}

pub fn places(tournament_id: &str) -> &'static [Place] {
    data()
        .places
        .get(tournament_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

pub fn practice_slots(tournament_id: &str) -> &'static [PracticeSlot] {
    data()
        .practice_schedules
        .get(tournament_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

pub fn knockout_slots(tournament_id: &str) -> &'static [KnockoutSlot] {
    data()
        .knockouts
        .get(tournament_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

/// Resolve the standard transfer endpoints for a stop from its key places.
///
/// Hotels are told apart by their notes: the one mentioning "team" houses
/// the delegations, the one mentioning "staff" houses league staff. A stop
/// with no places directory yet gets generic labels so plans can still be
/// drafted and edited by hand.
pub fn location_names(tournament_id: &str) -> LocationNames {
    let places = places(tournament_id);

    let first_of = |kind: PlaceKind| {
        places
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.name.clone())
    };
    let hotel_with_note = |tag: &str| {
        places
            .iter()
            .find(|p| p.kind == PlaceKind::Hotel && contains_ignore_case(&p.notes, tag))
            .map(|p| p.name.clone())
    };

    let venue = first_of(PlaceKind::Venue).unwrap_or_else(|| "Venue".to_string());
    let airport = first_of(PlaceKind::Airport).unwrap_or_else(|| "Airport".to_string());
    let team_hotel = hotel_with_note("team")
        .or_else(|| first_of(PlaceKind::Hotel))
        .unwrap_or_else(|| "Hotel".to_string());
    let staff_hotel = hotel_with_note("staff").unwrap_or_else(|| team_hotel.clone());

    LocationNames {
        venue,
        airport,
        team_hotel,
        staff_hotel,
    }
}
