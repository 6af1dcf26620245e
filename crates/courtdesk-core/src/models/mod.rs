//! Data models for the tournament dashboard.
//!
//! Two families live here:
//!
//! - Backend rows the app owns: `Transfer`, `Task`, `Contact`, `TeamInfo`,
//!   `DailyEvent`, `Person` — camelCase JSON, stored by the hosted backend
//! - Read-only mirrors of the public games feed: `Game`, `Club` and their
//!   nested pieces
//!
//! `Tournament` sits in between: the registry ships it, the backend rows
//! reference it by id.

pub mod contact;
pub mod event;
pub mod game;
pub mod person;
pub mod task;
pub mod team;
pub mod tournament;
pub mod transfer;

pub use contact::{Contact, ContactRole};
pub use event::{DailyEvent, EventType};
pub use game::{Club, ClubsPage, Game, GameSide, GamesPage};
pub use person::{Person, PersonRole, STAFF_CLUB_CODE};
pub use task::{sort_operational, Task, TaskCategory, TaskPriority};
pub use team::TeamInfo;
pub use tournament::{Tournament, TournamentStatus};
pub use transfer::{NewTransfer, Transfer, TransferStatus};
