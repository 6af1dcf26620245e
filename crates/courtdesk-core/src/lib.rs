//! Courtdesk core - operations backend for the tournament dashboard.
//!
//! This crate carries the registry of tournament stops, the domain models
//! shared with the companion app, and the logistics machinery built on
//! them: transfer plan generation and commit, the merged schedule
//! timeline, the daily briefing, and the arrivals/departures board.

pub mod commit;
pub mod config;
pub mod dashboard;
pub mod fixtures;
pub mod flights;
pub mod models;
pub mod planner;
pub mod registry;
pub mod store;
pub mod timeline;
pub mod utils;

pub use commit::{commit_plan, preview_lines, CommitReport};
pub use planner::{generate, PlanError, PlanRequest, STAFF_SUBJECT};
pub use registry::LocationNames;
pub use store::{MemoryStore, StoreError, TransferStore};
