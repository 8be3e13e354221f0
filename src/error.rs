//! Error types for crew-roster.
//!
//! Only entity construction, configuration loading, and export can fail.
//! A flight that no crew can legally fly is a scheduling outcome (it lands
//! in the roster's unassigned list), never an error.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for crew-roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised by the rostering core.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A flight's arrival is not strictly after its departure.
    #[error("Flight {flight_id}: arrival {arrival} must be after departure {departure}")]
    InvalidFlightTimes {
        flight_id: String,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
    },

    /// A departure/arrival timestamp could not be parsed.
    #[error("Flight {flight_id}: invalid {field} timestamp '{value}': {source}")]
    InvalidTimestamp {
        flight_id: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The flight is already placed somewhere in the roster.
    #[error("Flight {flight_id} is already placed in the roster")]
    AlreadyPlaced { flight_id: String },

    /// A crew identifier collides with the reserved `"unassigned"` export key.
    #[error("Crew identifier '{0}' collides with the reserved \"unassigned\" key")]
    ReservedCrewId(String),

    /// Scheduler configuration rejected.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// JSON parsing or rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
