//! Arrivals and departures board.
//!
//! People carry their own travel fields; this module turns them into a
//! per-day board, one entry per registered leg. A person appears on the
//! arrivals side as soon as either an arrival date or a flight is known,
//! same for departures. Legs with no date yet land in a trailing "TBD"
//! group.

use std::collections::BTreeMap;

use crate::models::{Club, Person, Transfer, STAFF_CLUB_CODE};
use crate::timeline::TBD_DATE;
use crate::utils::format::format_display_date;
use crate::utils::{contains_ignore_case, time_sort_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightDirection {
    Arrival,
    Departure,
}

impl std::fmt::Display for FlightDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightDirection::Arrival => write!(f, "Arrival"),
            FlightDirection::Departure => write!(f, "Departure"),
        }
    }
}

/// One travel leg on the board
#[derive(Debug, Clone)]
pub struct FlightEntry<'a> {
    pub person: &'a Person,
    pub direction: FlightDirection,
    pub date: &'a str,
    pub time: &'a str,
    pub flight: &'a str,
    /// Resolved club label: "Staff", the club's display name, or the raw
    /// code when the feed doesn't know the club
    pub club_name: String,
}

impl FlightEntry<'_> {
    /// Compact code for the board column: the part before the first "·"
    /// of the flight string, "—" when nothing is registered
    pub fn flight_code(&self) -> &str {
        if self.flight.is_empty() {
            return "—";
        }
        match self.flight.split('·').next() {
            Some(code) if !code.trim().is_empty() => code.trim(),
            _ => self.flight,
        }
    }
}

fn club_label(person: &Person, clubs: &[Club]) -> String {
    if person.club_code == STAFF_CLUB_CODE {
        return "Staff".to_string();
    }
    match clubs.iter().find(|c| c.code == person.club_code) {
        Some(club) => club.display_name(),
        None => person.club_code.clone(),
    }
}

/// Every registered travel leg, both directions, in people order
pub fn build_entries<'a>(people: &'a [Person], clubs: &[Club]) -> Vec<FlightEntry<'a>> {
    let mut entries = Vec::new();
    for person in people {
        let club_name = club_label(person, clubs);
        if person.has_arrival() {
            entries.push(FlightEntry {
                person,
                direction: FlightDirection::Arrival,
                date: &person.arrival_date,
                time: &person.arrival_time,
                flight: &person.arrival_flight,
                club_name: club_name.clone(),
            });
        }
        if person.has_departure() {
            entries.push(FlightEntry {
                person,
                direction: FlightDirection::Departure,
                date: &person.departure_date,
                time: &person.departure_time,
                flight: &person.departure_flight,
                club_name,
            });
        }
    }
    entries
}

/// One direction of the board, grouped by day. Days come out sorted with
/// the undated group last; within a day, legs without a time sort last.
pub fn flight_board<'a>(
    people: &'a [Person],
    clubs: &[Club],
    direction: FlightDirection,
) -> Vec<(String, Vec<FlightEntry<'a>>)> {
    let mut groups: BTreeMap<String, Vec<FlightEntry>> = BTreeMap::new();
    for entry in build_entries(people, clubs) {
        if entry.direction != direction {
            continue;
        }
        let label = if entry.date.is_empty() {
            TBD_DATE.to_string()
        } else {
            entry.date.to_string()
        };
        groups.entry(label).or_default().push(entry);
    }

    let undated = groups.remove(TBD_DATE);
    let mut board: Vec<(String, Vec<FlightEntry>)> = groups.into_iter().collect();
    if let Some(rows) = undated {
        board.push((TBD_DATE.to_string(), rows));
    }
    for (_, rows) in &mut board {
        rows.sort_by(|a, b| time_sort_key(a.time).cmp(time_sort_key(b.time)));
    }
    board
}

/// Group heading: "Date TBD" or "Fri, Feb 27"
pub fn date_heading(label: &str) -> String {
    if label == TBD_DATE {
        "Date TBD".to_string()
    } else {
        format_display_date(label)
    }
}

/// Tab badges and the summary bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightSummary {
    pub people: usize,
    pub arrivals: usize,
    pub departures: usize,
}

pub fn summarize_flights(people: &[Person]) -> FlightSummary {
    FlightSummary {
        people: people.len(),
        arrivals: people.iter().filter(|p| p.has_arrival()).count(),
        departures: people.iter().filter(|p| p.has_departure()).count(),
    }
}

/// The transfer already arranged for a person on a given day, if any.
/// Plans name whole teams, ad-hoc rides name people in the notes, so both
/// fields are searched.
pub fn find_transfer<'a>(
    transfers: &'a [Transfer],
    person_name: &str,
    date: &str,
) -> Option<&'a Transfer> {
    transfers.iter().find(|t| {
        t.date == date
            && (contains_ignore_case(&t.notes, person_name)
                || contains_ignore_case(&t.team_name, person_name))
    })
}
