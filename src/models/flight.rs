//! Flight (leg) model.
//!
//! A flight is one scheduled point-to-point operation with fixed departure
//! and arrival instants and an aircraft type. Flights are immutable values:
//! every construction path (builder, string parsing, deserialization) goes
//! through the same timing check, so a `Flight` with arrival at or before
//! departure cannot exist.
//!
//! # Time Model
//! Instants are timezone-aware and normalised to UTC. Text input accepts
//! RFC 3339 (`2024-02-01T08:00:00Z`, `2024-02-01T09:00:00+01:00`); text
//! without an offset is read as UTC.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A scheduled flight leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FlightRecord")]
pub struct Flight {
    id: String,
    origin: String,
    destination: String,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    aircraft: String,
}

/// Unchecked flight record, as handed over by a loader.
///
/// Convert with `Flight::try_from(record)`; the conversion enforces
/// arrival > departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Unique flight identifier (e.g., "FL001").
    pub id: String,
    /// Origin location code (e.g., "JFK").
    pub origin: String,
    /// Destination location code (e.g., "LHR").
    pub destination: String,
    /// Departure instant.
    pub departure: DateTime<Utc>,
    /// Arrival instant.
    pub arrival: DateTime<Utc>,
    /// Aircraft type code (e.g., "B747").
    pub aircraft: String,
}

impl Flight {
    /// Creates a flight, rejecting arrival at or before departure.
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        aircraft: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        if arrival <= departure {
            return Err(RosterError::InvalidFlightTimes {
                flight_id: id,
                departure,
                arrival,
            });
        }
        Ok(Self {
            id,
            origin: origin.into(),
            destination: destination.into(),
            departure,
            arrival,
            aircraft: aircraft.into(),
        })
    }

    /// Creates a flight from ISO-8601 departure/arrival text.
    ///
    /// # Example
    ///
    /// ```
    /// use crew_roster::models::Flight;
    ///
    /// let f = Flight::parse(
    ///     "FL001", "JFK", "LHR",
    ///     "2024-02-01T08:00:00Z", "2024-02-01T20:00:00Z",
    ///     "B747",
    /// ).unwrap();
    /// assert_eq!(f.duration_minutes(), 720);
    ///
    /// let bad = Flight::parse(
    ///     "FL002", "JFK", "LHR",
    ///     "2024-02-01T08:00:00Z", "2024-02-01T08:00:00Z",
    ///     "B747",
    /// );
    /// assert!(bad.is_err());
    /// ```
    pub fn parse(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: &str,
        arrival: &str,
        aircraft: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let departure = parse_instant(&id, "departure", departure)?;
        let arrival = parse_instant(&id, "arrival", arrival)?;
        Self::new(id, origin, destination, departure, arrival, aircraft)
    }

    /// Unique flight identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Origin location code.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination location code.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Departure instant (UTC).
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    /// Arrival instant (UTC).
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Aircraft type code.
    pub fn aircraft(&self) -> &str {
        &self.aircraft
    }

    /// Block time (arrival - departure). Always positive.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// Block time in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}

impl TryFrom<FlightRecord> for Flight {
    type Error = RosterError;

    fn try_from(record: FlightRecord) -> Result<Self> {
        Self::new(
            record.id,
            record.origin,
            record.destination,
            record.departure,
            record.arrival,
            record.aircraft,
        )
    }
}

fn parse_instant(flight_id: &str, field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    let text = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|source| RosterError::InvalidTimestamp {
            flight_id: flight_id.to_string(),
            field,
            value: value.to_string(),
            source,
        })
}
