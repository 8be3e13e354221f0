//! Airline crew rostering.
//!
//! Assigns scheduled flights to qualified crew members under legality
//! rules, producing a roster: per crew, the ordered flights they fly, plus
//! the flights nobody could legally take.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Flight`, `Crew`, `Roster`, `Violation`
//! - **`legality`**: Qualification, continuity, and minimum-rest checks
//! - **`scheduler`**: First-fit greedy `GreedyScheduler` and `RosterKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, reserved IDs, location codes)
//! - **`config`**: `SchedulerConfig` and `LegalityRules`
//! - **`export`**: Canonical JSON view of a roster
//!
//! Reading flights/crew from storage and writing the export to a file are
//! left to callers.
//!
//! # Example
//!
//! ```
//! use crew_roster::export::RosterExport;
//! use crew_roster::models::{Crew, Flight};
//! use crew_roster::scheduler::GreedyScheduler;
//!
//! let flights = vec![
//!     Flight::parse("FL001", "JFK", "LHR", "2024-02-01T08:00:00Z", "2024-02-01T20:00:00Z", "B747").unwrap(),
//!     Flight::parse("FL002", "LHR", "CDG", "2024-02-01T21:30:00Z", "2024-02-01T23:00:00Z", "B747").unwrap(),
//! ];
//! let crew = vec![Crew::new("C001", "JFK").with_qualifications_str("B747;A320")];
//!
//! let roster = GreedyScheduler::new().schedule(&flights, &crew);
//! let json = RosterExport::new(&roster).unwrap().to_json_string().unwrap();
//! assert_eq!(json, r#"{"C001":["FL001","FL002"],"unassigned":[]}"#);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod legality;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
