//! Morning briefing.
//!
//! One pass over the feed and the backend rows answers the operator's first
//! questions of the day: what plays today, who rides when, what's still
//! open. "Today" is the tournament's calendar day, not the server's.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::models::{DailyEvent, Game, Task, Tournament, Transfer};

/// How many open tasks the briefing lists
const PENDING_TASK_CAP: usize = 5;

/// Calendar date at the tournament site for a given UTC instant
pub fn local_today(tz_offset_hours: i32, now_utc: NaiveDateTime) -> String {
    (now_utc + Duration::hours(tz_offset_hours as i64))
        .date()
        .format("%Y-%m-%d")
        .to_string()
}

/// Days left before the first matchday, rounded up. Zero or negative means
/// the tournament is underway; an unparseable start date counts as underway.
pub fn days_until_start(tournament: &Tournament, now_utc: NaiveDateTime) -> i64 {
    let start = match NaiveDate::parse_from_str(&tournament.start_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return 0,
    };
    let remaining = start.and_time(NaiveTime::MIN) - now_utc;
    (remaining.num_seconds() as f64 / 86_400.0).ceil() as i64
}

/// Everything the dashboard shows for one tournament day
#[derive(Debug)]
pub struct DailyBriefing<'a> {
    /// Local calendar date the briefing covers
    pub today: String,
    pub days_until_start: i64,
    pub todays_games: Vec<&'a Game>,
    pub tomorrows_games: Vec<&'a Game>,
    pub todays_transfers: Vec<&'a Transfer>,
    pub todays_events: Vec<&'a DailyEvent>,
    /// Open tasks in operational order, capped at [`PENDING_TASK_CAP`]
    pub pending_tasks: Vec<&'a Task>,
    /// Titles of every open urgent task, even past the pending cap
    pub urgent_titles: Vec<&'a str>,
}

impl<'a> DailyBriefing<'a> {
    /// Assemble the briefing. Inputs are already scoped to the tournament;
    /// games come straight from the feed, the rest from the backend.
    pub fn build(
        tournament: &Tournament,
        now_utc: NaiveDateTime,
        games: &'a [Game],
        transfers: &'a [Transfer],
        tasks: &'a [Task],
        events: &'a [DailyEvent],
    ) -> Self {
        let today = local_today(tournament.timezone, now_utc);
        let tomorrow = local_today(tournament.timezone, now_utc + Duration::days(1));

        let mut todays_games: Vec<&Game> =
            games.iter().filter(|g| g.venue_date() == today).collect();
        todays_games.sort_by(|a, b| a.utc_date.cmp(&b.utc_date));

        let mut tomorrows_games: Vec<&Game> =
            games.iter().filter(|g| g.venue_date() == tomorrow).collect();
        tomorrows_games.sort_by(|a, b| a.utc_date.cmp(&b.utc_date));

        let mut todays_transfers: Vec<&Transfer> =
            transfers.iter().filter(|t| t.date == today).collect();
        todays_transfers.sort_by(|a, b| a.chrono_key().cmp(&b.chrono_key()));

        let todays_events: Vec<&DailyEvent> =
            events.iter().filter(|e| e.date == today).collect();

        let mut pending_tasks: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
        pending_tasks.sort_by_key(|t| t.sort_key());
        let urgent_titles: Vec<&str> = pending_tasks
            .iter()
            .filter(|t| t.is_urgent_open())
            .map(|t| t.title.as_str())
            .collect();
        pending_tasks.truncate(PENDING_TASK_CAP);

        debug!(
            tournament = %tournament.id,
            date = %today,
            games = todays_games.len(),
            transfers = todays_transfers.len(),
            events = todays_events.len(),
            open_tasks = pending_tasks.len(),
            "Built daily briefing"
        );

        DailyBriefing {
            today,
            days_until_start: days_until_start(tournament, now_utc),
            todays_games,
            tomorrows_games,
            todays_transfers,
            todays_events,
            pending_tasks,
            urgent_titles,
        }
    }

    pub fn is_live(&self) -> bool {
        self.days_until_start <= 0
    }
}
