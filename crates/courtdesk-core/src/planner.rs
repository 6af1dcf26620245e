//! Standard transfer-plan generation.
//!
//! Given a subject (one team, or the staff group), the tournament window,
//! and the stop's resolved locations, this produces the default set of
//! ground-transfer legs: airport pickup the day before, practice-day shuttle
//! for teams, venue runs for every on-site day, and the airport drop. The
//! output is a draft — times, drivers, and head counts stay empty until the
//! operator fills them in after review.
//!
//! Generation is pure: same request, same plan. Persisting the plan (and
//! skipping legs that already exist) is [`crate::commit`]'s job.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use thiserror::Error;
use tracing::debug;

use crate::models::{NewTransfer, TransferStatus};
use crate::registry::LocationNames;

/// Subject label that plans staff logistics instead of a team's
pub const STAFF_SUBJECT: &str = "EL Staff";

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("no subject selected")]
    EmptySubject,
    #[error("invalid {field} date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("tournament window is inverted: {start} to {end}")]
    InvertedRange { start: String, end: String },
    #[error("no {0} configured for this stop")]
    EmptyLocation(&'static str),
}

/// Everything the generator needs. Fixture dates are the subject's local
/// game days; they're ignored for the staff subject, which is on site every
/// tournament day.
#[derive(Debug, Clone)]
pub struct PlanRequest<'a> {
    pub tournament_id: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub subject: &'a str,
    pub locations: &'a LocationNames,
    pub fixture_dates: &'a [String],
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(value, DATE_FMT).map_err(|_| PlanError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Generate the standard transfer plan for one subject.
///
/// Emission order is fixed: arrival, practice pair (teams only), one
/// hotel/venue pair per on-site day ascending, departure. The departure leg
/// lands on the last on-site day — after a team's last game, they're gone —
/// falling back to the tournament end for a subject with no on-site days.
pub fn generate(request: &PlanRequest) -> Result<Vec<NewTransfer>, PlanError> {
    let subject = request.subject.trim();
    if subject.is_empty() {
        return Err(PlanError::EmptySubject);
    }

    let locations = request.locations;
    if locations.venue.trim().is_empty() {
        return Err(PlanError::EmptyLocation("venue"));
    }
    if locations.airport.trim().is_empty() {
        return Err(PlanError::EmptyLocation("airport"));
    }
    if locations.team_hotel.trim().is_empty() {
        return Err(PlanError::EmptyLocation("team hotel"));
    }
    if locations.staff_hotel.trim().is_empty() {
        return Err(PlanError::EmptyLocation("staff hotel"));
    }

    let start = parse_date("start", request.start_date)?;
    let end = parse_date("end", request.end_date)?;
    if end < start {
        return Err(PlanError::InvertedRange {
            start: request.start_date.to_string(),
            end: request.end_date.to_string(),
        });
    }

    let is_staff = subject == STAFF_SUBJECT;
    let hotel = if is_staff {
        &locations.staff_hotel
    } else {
        &locations.team_hotel
    };

    // On-site days: a team is only driven on its game days, staff covers
    // every day of the window.
    let mut on_site: BTreeSet<NaiveDate> = BTreeSet::new();
    if is_staff {
        on_site.extend(start.iter_days().take_while(|d| *d <= end));
    } else {
        for raw in request.fixture_dates {
            on_site.insert(parse_date("fixture", raw)?);
        }
    }

    // Everyone lands the day before the opening game; teams also practice
    // that day.
    let practice_date = start - Duration::days(1);

    let leg = |date: NaiveDate, from: &str, to: &str, notes: &str| NewTransfer {
        tournament_id: request.tournament_id.to_string(),
        date: date.format(DATE_FMT).to_string(),
        time: String::new(),
        from_location: from.to_string(),
        to_location: to.to_string(),
        team_id: None,
        team_name: subject.to_string(),
        driver_name: String::new(),
        driver_phone: String::new(),
        vehicle_info: String::new(),
        pax: 0,
        status: TransferStatus::Scheduled,
        notes: notes.to_string(),
    };

    let mut legs = Vec::with_capacity(on_site.len() * 2 + 4);

    legs.push(leg(practice_date, &locations.airport, hotel, "Arrival"));

    if !is_staff {
        legs.push(leg(practice_date, hotel, &locations.venue, "Practice"));
        legs.push(leg(practice_date, &locations.venue, hotel, "Return from practice"));
    }

    let (out_note, back_note) = if is_staff {
        ("To venue", "Return from venue")
    } else {
        ("Game day", "Return from game")
    };
    for date in &on_site {
        legs.push(leg(*date, hotel, &locations.venue, out_note));
        legs.push(leg(*date, &locations.venue, hotel, back_note));
    }

    let departure_date = on_site.iter().next_back().copied().unwrap_or(end);
    legs.push(leg(departure_date, hotel, &locations.airport, "Departure"));

    debug!(
        subject = %subject,
        staff = is_staff,
        legs = legs.len(),
        "Generated standard transfer plan"
    );
    Ok(legs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abu_dhabi_locations() -> LocationNames {
        LocationNames {
            venue: "SPACE42 Arena".to_string(),
            airport: "Abu Dhabi International Airport (AUH)".to_string(),
            team_hotel: "W Abu Dhabi - Yas Island".to_string(),
            staff_hotel: "Hilton Abu Dhabi Yas Island".to_string(),
        }
    }

    fn request<'a>(
        subject: &'a str,
        fixtures: &'a [String],
        locations: &'a LocationNames,
    ) -> PlanRequest<'a> {
        PlanRequest {
            tournament_id: "abu-dhabi-2026",
            start_date: "2026-02-27",
            end_date: "2026-03-01",
            subject,
            locations,
            fixture_dates: fixtures,
        }
    }

    fn summarize(legs: &[NewTransfer]) -> Vec<(String, String, String, String)> {
        legs.iter()
            .map(|l| {
                (
                    l.date.clone(),
                    l.from_location.clone(),
                    l.to_location.clone(),
                    l.notes.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_team_plan_full_sequence() {
        let locations = abu_dhabi_locations();
        let fixtures = vec!["2026-02-27".to_string(), "2026-02-28".to_string()];
        let legs = generate(&request("Zalgiris", &fixtures, &locations)).unwrap();

        let hotel = "W Abu Dhabi - Yas Island";
        let venue = "SPACE42 Arena";
        let airport = "Abu Dhabi International Airport (AUH)";
        assert_eq!(
            summarize(&legs),
            vec![
                ("2026-02-26".into(), airport.into(), hotel.into(), "Arrival".into()),
                ("2026-02-26".into(), hotel.into(), venue.into(), "Practice".into()),
                ("2026-02-26".into(), venue.into(), hotel.into(), "Return from practice".into()),
                ("2026-02-27".into(), hotel.into(), venue.into(), "Game day".into()),
                ("2026-02-27".into(), venue.into(), hotel.into(), "Return from game".into()),
                ("2026-02-28".into(), hotel.into(), venue.into(), "Game day".into()),
                ("2026-02-28".into(), venue.into(), hotel.into(), "Return from game".into()),
                ("2026-02-28".into(), hotel.into(), airport.into(), "Departure".into()),
            ]
        );
    }

    #[test]
    fn test_staff_plan_covers_every_day() {
        let locations = abu_dhabi_locations();
        let legs = generate(&request(STAFF_SUBJECT, &[], &locations)).unwrap();

        let hotel = "Hilton Abu Dhabi Yas Island";
        let venue = "SPACE42 Arena";
        let airport = "Abu Dhabi International Airport (AUH)";
        assert_eq!(
            summarize(&legs),
            vec![
                ("2026-02-26".into(), airport.into(), hotel.into(), "Arrival".into()),
                ("2026-02-27".into(), hotel.into(), venue.into(), "To venue".into()),
                ("2026-02-27".into(), venue.into(), hotel.into(), "Return from venue".into()),
                ("2026-02-28".into(), hotel.into(), venue.into(), "To venue".into()),
                ("2026-02-28".into(), venue.into(), hotel.into(), "Return from venue".into()),
                ("2026-03-01".into(), hotel.into(), venue.into(), "To venue".into()),
                ("2026-03-01".into(), venue.into(), hotel.into(), "Return from venue".into()),
                ("2026-03-01".into(), hotel.into(), airport.into(), "Departure".into()),
            ]
        );
    }

    #[test]
    fn test_staff_ignores_fixture_dates() {
        let locations = abu_dhabi_locations();
        let fixtures = vec!["2026-02-28".to_string()];
        let with = generate(&request(STAFF_SUBJECT, &fixtures, &locations)).unwrap();
        let without = generate(&request(STAFF_SUBJECT, &[], &locations)).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_team_without_fixtures_departs_on_end_date() {
        let locations = abu_dhabi_locations();
        let legs = generate(&request("Ulm", &[], &locations)).unwrap();

        assert_eq!(legs.len(), 4);
        assert_eq!(legs[0].notes, "Arrival");
        assert_eq!(legs[1].notes, "Practice");
        assert_eq!(legs[2].notes, "Return from practice");
        assert_eq!(legs[3].notes, "Departure");
        assert_eq!(legs[3].date, "2026-03-01");
    }

    #[test]
    fn test_team_departs_after_last_game() {
        let locations = abu_dhabi_locations();
        // Knocked out after the group phase: no Sunday game
        let fixtures = vec!["2026-02-27".to_string(), "2026-02-28".to_string()];
        let legs = generate(&request("Zalgiris", &fixtures, &locations)).unwrap();
        let departure = legs.last().unwrap();
        assert_eq!(departure.notes, "Departure");
        assert_eq!(departure.date, "2026-02-28");
    }

    #[test]
    fn test_fixture_dates_are_deduped_and_sorted() {
        let locations = abu_dhabi_locations();
        let fixtures = vec![
            "2026-02-28".to_string(),
            "2026-02-27".to_string(),
            "2026-02-28".to_string(),
        ];
        let legs = generate(&request("Zalgiris", &fixtures, &locations)).unwrap();

        let game_days: Vec<&str> = legs
            .iter()
            .filter(|l| l.notes == "Game day")
            .map(|l| l.date.as_str())
            .collect();
        assert_eq!(game_days, vec!["2026-02-27", "2026-02-28"]);
    }

    #[test]
    fn test_exactly_one_arrival_and_departure() {
        let locations = abu_dhabi_locations();
        let fixtures = vec!["2026-02-27".to_string()];
        for subject in ["Zalgiris", STAFF_SUBJECT] {
            let legs = generate(&request(subject, &fixtures, &locations)).unwrap();
            assert_eq!(legs.iter().filter(|l| l.notes == "Arrival").count(), 1);
            assert_eq!(legs.iter().filter(|l| l.notes == "Departure").count(), 1);
            assert_eq!(legs.first().unwrap().notes, "Arrival");
            assert_eq!(legs.last().unwrap().notes, "Departure");
        }
    }

    #[test]
    fn test_venue_pairs_keep_out_before_return() {
        let locations = abu_dhabi_locations();
        let legs = generate(&request(STAFF_SUBJECT, &[], &locations)).unwrap();
        let mut seen_out_today = false;
        let mut current = String::new();
        for leg in legs.iter().filter(|l| l.notes != "Arrival" && l.notes != "Departure") {
            if leg.date != current {
                current = leg.date.clone();
                seen_out_today = false;
            }
            if leg.notes == "To venue" {
                assert!(!seen_out_today);
                seen_out_today = true;
            } else {
                assert!(seen_out_today, "return leg before outbound on {}", leg.date);
            }
        }
    }

    #[test]
    fn test_draft_fields_are_blank() {
        let locations = abu_dhabi_locations();
        let fixtures = vec!["2026-02-27".to_string()];
        let legs = generate(&request("Zalgiris", &fixtures, &locations)).unwrap();
        for leg in &legs {
            assert_eq!(leg.tournament_id, "abu-dhabi-2026");
            assert_eq!(leg.team_name, "Zalgiris");
            assert_eq!(leg.time, "");
            assert_eq!(leg.driver_name, "");
            assert_eq!(leg.driver_phone, "");
            assert_eq!(leg.vehicle_info, "");
            assert_eq!(leg.pax, 0);
            assert_eq!(leg.status, TransferStatus::Scheduled);
            assert_eq!(leg.team_id, None);
            assert!(!leg.date.is_empty());
            assert!(!leg.from_location.is_empty());
            assert!(!leg.to_location.is_empty());
        }
    }

    #[test]
    fn test_generation_is_repeatable() {
        let locations = abu_dhabi_locations();
        let fixtures = vec!["2026-02-27".to_string(), "2026-03-01".to_string()];
        let first = generate(&request("Barcelona", &fixtures, &locations)).unwrap();
        let second = generate(&request("Barcelona", &fixtures, &locations)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_practice_day_crosses_month_and_year() {
        let locations = abu_dhabi_locations();
        let march = PlanRequest {
            tournament_id: "t",
            start_date: "2026-03-01",
            end_date: "2026-03-03",
            subject: "Zalgiris",
            locations: &locations,
            fixture_dates: &[],
        };
        let legs = generate(&march).unwrap();
        assert_eq!(legs[0].date, "2026-02-28"); // 2026 is not a leap year

        let january = PlanRequest {
            start_date: "2026-01-01",
            end_date: "2026-01-03",
            ..march
        };
        let legs = generate(&january).unwrap();
        assert_eq!(legs[0].date, "2025-12-31");
    }

    #[test]
    fn test_empty_subject_rejected() {
        let locations = abu_dhabi_locations();
        let err = generate(&request("  ", &[], &locations)).unwrap_err();
        assert_eq!(err, PlanError::EmptySubject);
    }

    #[test]
    fn test_bad_dates_rejected() {
        let locations = abu_dhabi_locations();

        let mut req = request("Zalgiris", &[], &locations);
        req.start_date = "27/02/2026";
        assert!(matches!(
            generate(&req).unwrap_err(),
            PlanError::InvalidDate { field: "start", .. }
        ));

        let mut req = request("Zalgiris", &[], &locations);
        req.end_date = "2026-02-26";
        assert!(matches!(
            generate(&req).unwrap_err(),
            PlanError::InvertedRange { .. }
        ));

        let fixtures = vec!["Feb 27".to_string()];
        let req = request("Zalgiris", &fixtures, &locations);
        assert!(matches!(
            generate(&req).unwrap_err(),
            PlanError::InvalidDate { field: "fixture", .. }
        ));
    }

    #[test]
    fn test_missing_location_rejected() {
        let mut locations = abu_dhabi_locations();
        locations.venue = "  ".to_string();
        let err = generate(&request("Zalgiris", &[], &locations)).unwrap_err();
        assert_eq!(err, PlanError::EmptyLocation("venue"));
    }

    #[test]
    fn test_single_day_window() {
        let locations = abu_dhabi_locations();
        let one_day = PlanRequest {
            tournament_id: "t",
            start_date: "2026-02-27",
            end_date: "2026-02-27",
            subject: STAFF_SUBJECT,
            locations: &locations,
            fixture_dates: &[],
        };
        let legs = generate(&one_day).unwrap();
        // Arrival + one venue pair + departure, all keyed off the single day
        assert_eq!(legs.len(), 4);
        assert_eq!(legs[0].date, "2026-02-26");
        assert_eq!(legs[3].date, "2026-02-27");
    }
}
