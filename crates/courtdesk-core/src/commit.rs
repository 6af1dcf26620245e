//! Persisting a generated plan.
//!
//! The generator only drafts legs; this module writes them. Before writing
//! it loads what's already scheduled and drops any leg that would duplicate
//! an existing one (same subject, same day, same purpose) — regenerating a
//! plan after adding one more game must only create the missing legs. Legs
//! are inserted one at a time so a single backend hiccup costs one leg, not
//! the batch.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::models::{NewTransfer, Transfer};
use crate::store::{StoreError, TransferStore};
use crate::utils::format::format_display_date;

/// Outcome of one commit: what got written, what already existed, what the
/// backend refused.
#[derive(Debug, Default)]
pub struct CommitReport {
    pub created: Vec<Transfer>,
    pub skipped: usize,
    pub failed: usize,
}

impl CommitReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// "6 created, 2 skipped, 0 failed"
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} skipped, {} failed",
            self.created.len(),
            self.skipped,
            self.failed
        )
    }
}

/// One review line per leg: "Thu, Feb 26 · Airport → Hotel · Arrival"
pub fn preview_lines(legs: &[NewTransfer]) -> Vec<String> {
    legs.iter()
        .map(|leg| {
            format!(
                "{} · {} → {} · {}",
                format_display_date(&leg.date),
                leg.from_location,
                leg.to_location,
                leg.notes
            )
        })
        .collect()
}

/// Write a plan's legs through the store, skipping already-scheduled ones.
///
/// Only the initial listing is fatal — without it every duplicate would be
/// written again. Individual insert failures are counted and logged, and
/// the rest of the plan still goes through.
pub async fn commit_plan(
    store: &dyn TransferStore,
    tournament_id: &str,
    legs: Vec<NewTransfer>,
) -> Result<CommitReport, StoreError> {
    let existing = store.list(tournament_id).await?;
    let mut scheduled: HashSet<(String, String, String)> = existing
        .iter()
        .map(|t| {
            let (team, date, notes) = t.dedup_key();
            (team.to_string(), date.to_string(), notes.to_string())
        })
        .collect();

    let mut report = CommitReport::default();
    for leg in legs {
        let (team, date, notes) = leg.dedup_key();
        let key = (team.to_string(), date.to_string(), notes.to_string());
        if scheduled.contains(&key) {
            debug!(subject = %team, date = %date, notes = %notes, "Leg already scheduled, skipping");
            report.skipped += 1;
            continue;
        }

        match store.insert(leg).await {
            Ok(row) => {
                scheduled.insert(key);
                report.created.push(row);
            }
            Err(err) => {
                warn!(
                    subject = %key.0,
                    date = %key.1,
                    notes = %key.2,
                    error = %err,
                    "Failed to create transfer leg"
                );
                report.failed += 1;
            }
        }
    }

    info!(
        tournament = %tournament_id,
        created = report.created.len(),
        skipped = report.skipped,
        failed = report.failed,
        "Committed transfer plan"
    );
    Ok(report)
}
