//! Generates a transfer plan for one team and walks it through review and
//! commit against the in-memory store.
//!
//! Run with: cargo run -p courtdesk-core --example plan_preview

use std::io;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use courtdesk_core::commit::{commit_plan, preview_lines};
use courtdesk_core::planner::{generate, PlanRequest, STAFF_SUBJECT};
use courtdesk_core::registry;
use courtdesk_core::store::{MemoryStore, TransferStore};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    registry::init();
    let tournament = registry::tournament("abu-dhabi-2026")
        .ok_or_else(|| anyhow::anyhow!("tournament not registered"))?;
    let locations = registry::location_names(&tournament.id);

    println!("{} — {}", tournament.name, tournament.location_line());
    println!();

    // Group-stage dates as the published schedule has them
    let fixtures = vec!["2026-02-27".to_string(), "2026-02-28".to_string()];
    let request = PlanRequest {
        tournament_id: &tournament.id,
        start_date: &tournament.start_date,
        end_date: &tournament.end_date,
        subject: "Zalgiris",
        locations: &locations,
        fixture_dates: &fixtures,
    };

    let plan = generate(&request)?;
    println!("Draft plan for Zalgiris ({} legs):", plan.len());
    for line in preview_lines(&plan) {
        println!("  {}", line);
    }
    println!();

    let store = MemoryStore::new();
    let report = commit_plan(&store, &tournament.id, plan).await?;
    println!("First commit:  {}", report.summary());

    // Running the same plan again must not duplicate anything
    let report = commit_plan(&store, &tournament.id, generate(&request)?).await?;
    println!("Second commit: {}", report.summary());

    // The staff shuttle runs every day of the window, fixtures or not
    let staff_plan = generate(&PlanRequest {
        subject: STAFF_SUBJECT,
        fixture_dates: &[],
        ..request
    })?;
    let report = commit_plan(&store, &tournament.id, staff_plan).await?;
    println!("Staff plan:    {}", report.summary());

    let rows = store.list(&tournament.id).await?;
    println!();
    println!("{} transfers now scheduled", rows.len());
    Ok(())
}
