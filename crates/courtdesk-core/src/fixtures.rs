//! Games-feed aggregation: who plays when, in the tournament's own calendar.
//!
//! The feed timestamps games in UTC; everything here converts to the stop's
//! local date first, since an evening tip-off in Kaunas can be a next-day
//! game in Abu Dhabi. All lookups match teams on their display names, the
//! same labels shown in pickers and stored on transfers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Club, Game};
use crate::planner::STAFF_SUBJECT;
use crate::registry::KnockoutSlot;
use crate::utils::format::{format_local_date, local_datetime};

/// The pickable subject list: every club by display name, plus the staff
/// group last.
pub fn subject_names(clubs: &[Club]) -> Vec<String> {
    let mut names: Vec<String> = clubs.iter().map(|c| c.display_name()).collect();
    names.push(STAFF_SUBJECT.to_string());
    names
}

/// Local dates on which the subject plays, ascending and deduplicated.
///
/// The staff subject has no fixtures; the planner covers every tournament
/// day for it instead. Games whose feed timestamp doesn't parse are left
/// out rather than guessed at.
pub fn fixture_dates(games: &[Game], subject: &str, tz: i32) -> Vec<String> {
    if subject == STAFF_SUBJECT {
        return Vec::new();
    }

    let mut dates = BTreeSet::new();
    for game in games {
        if !game.involves(subject) {
            continue;
        }
        match local_datetime(&game.utc_date, tz as i64) {
            Some(local) => {
                dates.insert(local.format("%Y-%m-%d").to_string());
            }
            None => {
                debug!(
                    game = %game.id,
                    utc_date = %game.utc_date,
                    "Skipping game with unparseable feed date"
                );
            }
        }
    }
    dates.into_iter().collect()
}

/// Games grouped by local date, dates ascending, each day's games in
/// tip-off order. `group` filters on the feed's raw group name.
pub fn games_by_date<'a>(
    games: &'a [Game],
    tz: i32,
    group: Option<&str>,
) -> Vec<(String, Vec<&'a Game>)> {
    let mut by_date: Vec<(String, Vec<&'a Game>)> = Vec::new();

    for game in games {
        if let Some(group) = group {
            if game.group.raw_name != group {
                continue;
            }
        }
        let key = format_local_date(&game.utc_date, tz as i64);
        match by_date.iter_mut().find(|(date, _)| *date == key) {
            Some((_, day)) => day.push(game),
            None => by_date.push((key, vec![game])),
        }
    }

    by_date.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, day) in &mut by_date {
        day.sort_by(|a, b| a.utc_date.cmp(&b.utc_date));
    }
    by_date
}

/// Distinct raw group names for filter chips, sorted
pub fn group_names(games: &[Game]) -> Vec<String> {
    let set: BTreeSet<&str> = games.iter().map(|g| g.group.raw_name.as_str()).collect();
    set.into_iter().map(|s| s.to_string()).collect()
}

/// Knockout dates the feed doesn't cover yet. Until the group stage
/// settles the bracket, these days get placeholder rows from the registry
/// instead of real fixtures.
pub fn knockout_dates_without_games(
    slots: &[KnockoutSlot],
    games: &[Game],
    tz: i32,
) -> Vec<String> {
    let feed_dates: BTreeSet<String> = games
        .iter()
        .map(|g| format_local_date(&g.utc_date, tz as i64))
        .collect();

    let mut seen = BTreeSet::new();
    let mut dates = Vec::new();
    for slot in slots {
        if seen.insert(slot.date.as_str()) && !feed_dates.contains(&slot.date) {
            dates.push(slot.date.clone());
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::test_game;

    #[test]
    fn test_fixture_dates_matches_either_side() {
        let games = vec![
            test_game("1", "2026-02-27T13:30:00Z", 4, "Zalgiris", "Barcelona"),
            test_game("2", "2026-02-28T09:00:00Z", 4, "Ulm", "Zalgiris"),
            test_game("3", "2026-02-28T11:15:00Z", 4, "Barcelona", "Ulm"),
        ];
        assert_eq!(
            fixture_dates(&games, "Zalgiris", 4),
            vec!["2026-02-27", "2026-02-28"]
        );
        assert_eq!(fixture_dates(&games, "Barcelona", 4).len(), 2);
        assert_eq!(fixture_dates(&games, "Madrid", 4), Vec::<String>::new());
    }

    #[test]
    fn test_fixture_dates_cross_midnight() {
        // 21:30 UTC tips off at 01:30 next day in Abu Dhabi
        let games = vec![test_game("1", "2026-02-27T21:30:00Z", 4, "Zalgiris", "Ulm")];
        assert_eq!(fixture_dates(&games, "Zalgiris", 4), vec!["2026-02-28"]);
    }

    #[test]
    fn test_fixture_dates_dedups_double_headers() {
        let games = vec![
            test_game("1", "2026-02-27T09:00:00Z", 4, "Zalgiris", "Ulm"),
            test_game("2", "2026-02-27T15:00:00Z", 4, "Barcelona", "Zalgiris"),
        ];
        assert_eq!(fixture_dates(&games, "Zalgiris", 4), vec!["2026-02-27"]);
    }

    #[test]
    fn test_fixture_dates_uses_display_names() {
        let games = vec![test_game("1", "2026-02-27T13:30:00Z", 4, "Real", "Ulm")];
        assert_eq!(fixture_dates(&games, "R. Madrid", 4), vec!["2026-02-27"]);
        assert!(fixture_dates(&games, "Real", 4).is_empty());
    }

    #[test]
    fn test_fixture_dates_staff_is_empty() {
        let games = vec![test_game("1", "2026-02-27T13:30:00Z", 4, "Zalgiris", "Ulm")];
        assert!(fixture_dates(&games, STAFF_SUBJECT, 4).is_empty());
    }

    #[test]
    fn test_fixture_dates_skips_broken_feed_rows() {
        let games = vec![
            test_game("1", "not a timestamp", 4, "Zalgiris", "Ulm"),
            test_game("2", "2026-02-28T09:00:00Z", 4, "Ulm", "Zalgiris"),
        ];
        assert_eq!(fixture_dates(&games, "Zalgiris", 4), vec!["2026-02-28"]);
    }

    #[test]
    fn test_games_by_date_sorts_and_groups() {
        let games = vec![
            test_game("late", "2026-02-28T15:00:00Z", 4, "A", "B"),
            test_game("early", "2026-02-28T09:00:00Z", 4, "C", "D"),
            test_game("first", "2026-02-27T13:30:00Z", 4, "A", "C"),
        ];
        let grouped = games_by_date(&games, 4, None);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "2026-02-27");
        assert_eq!(grouped[1].0, "2026-02-28");
        let day_two: Vec<&str> = grouped[1].1.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(day_two, vec!["early", "late"]);
    }

    #[test]
    fn test_games_by_date_group_filter() {
        let mut a = test_game("1", "2026-02-27T13:30:00Z", 4, "A", "B");
        a.group.raw_name = "GROUP A".to_string();
        let mut b = test_game("2", "2026-02-27T15:30:00Z", 4, "C", "D");
        b.group.raw_name = "GROUP B".to_string();

        let games = vec![a, b];
        let grouped = games_by_date(&games, 4, Some("GROUP B"));
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[0].1[0].id, "2");

        assert_eq!(group_names(&games), vec!["GROUP A", "GROUP B"]);
    }

    #[test]
    fn test_subject_names_ends_with_staff() {
        assert_eq!(subject_names(&[]), vec![STAFF_SUBJECT.to_string()]);

        let club = |editorial: &str| Club {
            code: editorial.to_uppercase(),
            name: editorial.to_string(),
            abbreviated_name: editorial.to_string(),
            editorial_name: editorial.to_string(),
            tv_code: editorial.chars().take(3).collect(),
            is_virtual: false,
            images: None,
            country: None,
            city: None,
        };
        let names = subject_names(&[club("Real"), club("Zalgiris")]);
        assert_eq!(names, vec!["R. Madrid", "Zalgiris", STAFF_SUBJECT]);
    }

    #[test]
    fn test_knockout_dates_without_games() {
        let slots = vec![
            KnockoutSlot {
                date: "2026-03-01".to_string(),
                local_time: "10:00".to_string(),
                label: "7th Place Game".to_string(),
                venue: "SPACE42".to_string(),
            },
            KnockoutSlot {
                date: "2026-03-01".to_string(),
                local_time: "17:00".to_string(),
                label: "Final · F4 Ticket".to_string(),
                venue: "SPACE42".to_string(),
            },
        ];
        let group_stage = vec![test_game("1", "2026-02-27T13:30:00Z", 4, "A", "B")];
        assert_eq!(
            knockout_dates_without_games(&slots, &group_stage, 4),
            vec!["2026-03-01"]
        );

        // Once the feed publishes Sunday's bracket, the placeholders go away
        let with_sunday = vec![
            test_game("1", "2026-02-27T13:30:00Z", 4, "A", "B"),
            test_game("2", "2026-03-01T06:00:00Z", 4, "A", "D"),
        ];
        assert!(knockout_dates_without_games(&slots, &with_sunday, 4).is_empty());
    }
}
