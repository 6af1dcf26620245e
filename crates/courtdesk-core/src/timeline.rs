//! Merged schedule timeline.
//!
//! The schedule view shows stored transfers and day-programme events in one
//! chronological list. This module flattens both into a common entry shape,
//! applies the type and date filters, and groups rows by day with undated
//! entries collected under a leading "TBD" bucket.

use std::collections::BTreeSet;

use crate::models::{DailyEvent, EventType, Transfer};
use crate::utils::time_sort_key;

/// Bucket label for entries whose date is still unknown
pub const TBD_DATE: &str = "TBD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Transfer,
    Event(EventType),
}

/// One row of the merged schedule, from either source
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub id: String,
    pub date: String,
    pub time: String,
    pub kind: EntryKind,
    /// Short badge text: transfer status or event type
    pub tag: String,
    pub title: String,
    pub subtitle: String,
    pub passengers: Vec<String>,
}

impl TimelineEntry {
    fn from_transfer(t: &Transfer) -> Self {
        let passengers = t.passenger_names();
        let subtitle = if passengers.is_empty() {
            "Staff".to_string()
        } else {
            passengers.join(", ")
        };
        TimelineEntry {
            id: format!("transfer-{}", t.id),
            date: t.date.clone(),
            time: t.time.clone(),
            kind: EntryKind::Transfer,
            tag: t.status.to_string(),
            title: t.route(),
            subtitle,
            passengers,
        }
    }

    fn from_event(e: &DailyEvent) -> Self {
        let passengers = if e.team_name.is_empty() {
            Vec::new()
        } else {
            vec![e.team_name.clone()]
        };
        TimelineEntry {
            id: format!("event-{}", e.id),
            date: e.date.clone(),
            time: e.time.clone(),
            kind: EntryKind::Event(e.event_type),
            tag: e.event_type.to_string(),
            title: e.title.clone(),
            subtitle: e.context_line(),
            passengers,
        }
    }
}

/// What the type chips select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    Transfers,
    Events(EventType),
}

impl EntryFilter {
    fn admits(self, kind: EntryKind) -> bool {
        match (self, kind) {
            (EntryFilter::All, _) => true,
            (EntryFilter::Transfers, EntryKind::Transfer) => true,
            (EntryFilter::Events(wanted), EntryKind::Event(actual)) => wanted == actual,
            _ => false,
        }
    }
}

/// Flatten, filter and sort both sources into one chronological list.
///
/// Undated entries sort before dated ones; within a day, entries without a
/// time go last.
pub fn build_timeline(
    transfers: &[Transfer],
    events: &[DailyEvent],
    filter: EntryFilter,
    date: Option<&str>,
) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = transfers
        .iter()
        .map(TimelineEntry::from_transfer)
        .chain(events.iter().map(TimelineEntry::from_event))
        .filter(|entry| filter.admits(entry.kind))
        .filter(|entry| date.map_or(true, |d| entry.date == d))
        .collect();
    entries.sort_by(|a, b| {
        (a.date.as_str(), time_sort_key(&a.time)).cmp(&(b.date.as_str(), time_sort_key(&b.time)))
    });
    entries
}

/// Group a sorted timeline by day, labelling undated entries [`TBD_DATE`]
pub fn group_by_date(entries: Vec<TimelineEntry>) -> Vec<(String, Vec<TimelineEntry>)> {
    let mut groups: Vec<(String, Vec<TimelineEntry>)> = Vec::new();
    for entry in entries {
        let label = if entry.date.is_empty() {
            TBD_DATE.to_string()
        } else {
            entry.date.clone()
        };
        match groups.last_mut() {
            Some((current, rows)) if *current == label => rows.push(entry),
            _ => groups.push((label, vec![entry])),
        }
    }
    groups
}

/// Distinct dates across both sources, for the date filter chips
pub fn timeline_dates(transfers: &[Transfer], events: &[DailyEvent]) -> Vec<String> {
    let dates: BTreeSet<&str> = transfers
        .iter()
        .map(|t| t.date.as_str())
        .chain(events.iter().map(|e| e.date.as_str()))
        .filter(|d| !d.is_empty())
        .collect();
    dates.into_iter().map(str::to_string).collect()
}

/// Counts for the summary bar above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSummary {
    pub transfers: usize,
    pub practices: usize,
    pub other_events: usize,
}

pub fn summarize(transfers: &[Transfer], events: &[DailyEvent]) -> TimelineSummary {
    let practices = events
        .iter()
        .filter(|e| e.event_type == EventType::Practice)
        .count();
    TimelineSummary {
        transfers: transfers.len(),
        practices,
        other_events: events.len() - practices,
    }
}
