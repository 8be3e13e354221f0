//! Roster (assignment ledger) and legality violation models.
//!
//! A roster maps each crew id to the flights that crew flies, kept in
//! ascending departure order, plus the flights nobody could take.
//!
//! # Invariants
//! - A flight appears at most once in the whole roster: in one crew's
//!   sequence or in the unassigned list.
//! - Each crew's sequence is ordered by departure.
//! - Crews appear only while they hold at least one flight.
//!
//! Legality (qualification, continuity, rest) is *not* a roster invariant.
//! It is checked by `legality::validate_roster` at chosen points in time,
//! so a roster may be transiently illegal during a scheduling trial.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Flight;
use crate::error::{Result, RosterError};

/// Crew-to-flights assignment ledger for a single scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    schedule: BTreeMap<String, Vec<Flight>>,
    unassigned: Vec<Flight>,
}

/// A legality rule violation found in a crew's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which rule was broken.
    pub violation_type: ViolationType,
    /// Crew whose sequence is illegal.
    pub crew_id: String,
    /// Offending flight (the later one of a pair).
    pub flight_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of legality violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Roster holds a crew id missing from the crew lookup.
    UnknownCrew,
    /// Crew lacks the flight's aircraft-type qualification.
    Unqualified,
    /// Flight does not depart where the previous one arrived.
    BrokenContinuity,
    /// Gap between arrival and next departure is below the minimum rest.
    InsufficientRest,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a flight into a crew's sequence, keeping departure order.
    ///
    /// Creates the sequence on first use. A flight departing at the same
    /// instant as existing entries is placed after them, so the ledger itself
    /// is only non-strictly ordered; strict ordering of a legal sequence
    /// follows from the rest rule in `legality::validate_sequence`.
    pub fn assign(&mut self, crew_id: impl Into<String>, flight: Flight) {
        let flights = self.schedule.entry(crew_id.into()).or_default();
        let pos = flights.partition_point(|f| f.departure() <= flight.departure());
        flights.insert(pos, flight);
    }

    /// Removes the last flight of a crew's sequence.
    ///
    /// Only undoes the most recent `assign` when that flight sorted last,
    /// which holds when flights are assigned in ascending departure order.
    /// An emptied sequence is removed.
    pub(crate) fn unassign_last(&mut self, crew_id: &str) -> Option<Flight> {
        let flights = self.schedule.get_mut(crew_id)?;
        let removed = flights.pop();
        if flights.is_empty() {
            self.schedule.remove(crew_id);
        }
        removed
    }

    /// Records a flight no crew could legally take.
    ///
    /// Fails if the flight is already placed anywhere in the roster.
    pub fn record_unassigned(&mut self, flight: Flight) -> Result<()> {
        if self.contains_flight(flight.id()) {
            return Err(RosterError::AlreadyPlaced {
                flight_id: flight.id().to_string(),
            });
        }
        self.unassigned.push(flight);
        Ok(())
    }

    /// Committed assignments (crew id → flights), in ascending crew id order.
    pub fn schedule(&self) -> &BTreeMap<String, Vec<Flight>> {
        &self.schedule
    }

    /// Flights assigned to a crew (empty if none).
    pub fn flights_for(&self, crew_id: &str) -> &[Flight] {
        self.schedule.get(crew_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flight ids assigned to a crew, in departure order.
    pub fn flight_ids_for(&self, crew_id: &str) -> Vec<&str> {
        self.flights_for(crew_id).iter().map(Flight::id).collect()
    }

    /// Flights nobody could take, in scheduling order.
    pub fn unassigned(&self) -> &[Flight] {
        &self.unassigned
    }

    /// Ids of unassigned flights.
    pub fn unassigned_ids(&self) -> Vec<&str> {
        self.unassigned.iter().map(Flight::id).collect()
    }

    /// Crew holding the given flight, if assigned.
    pub fn crew_for_flight(&self, flight_id: &str) -> Option<&str> {
        self.schedule
            .iter()
            .find(|(_, flights)| flights.iter().any(|f| f.id() == flight_id))
            .map(|(crew_id, _)| crew_id.as_str())
    }

    /// Whether a flight id appears anywhere in the roster.
    pub fn contains_flight(&self, flight_id: &str) -> bool {
        self.crew_for_flight(flight_id).is_some()
            || self.unassigned.iter().any(|f| f.id() == flight_id)
    }

    /// Number of crew-assigned flights.
    pub fn assigned_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }

    /// Number of unassigned flights.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Number of crews holding at least one flight.
    pub fn crew_count(&self) -> usize {
        self.schedule.len()
    }

    /// Whether nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty() && self.unassigned.is_empty()
    }
}

impl Violation {
    /// Creates an unknown-crew violation.
    pub fn unknown_crew(crew_id: impl Into<String>, flight_id: impl Into<String>) -> Self {
        let crew_id = crew_id.into();
        Self {
            violation_type: ViolationType::UnknownCrew,
            message: format!("Crew {crew_id} is not in the crew lookup"),
            crew_id,
            flight_id: flight_id.into(),
        }
    }

    /// Creates a qualification violation.
    pub fn unqualified(crew_id: impl Into<String>, flight: &Flight) -> Self {
        let crew_id = crew_id.into();
        Self {
            violation_type: ViolationType::Unqualified,
            message: format!("Crew {crew_id} not qualified for {}", flight.aircraft()),
            crew_id,
            flight_id: flight.id().to_string(),
        }
    }

    /// Creates a continuity violation between two adjacent flights.
    pub fn broken_continuity(crew_id: impl Into<String>, prev: &Flight, next: &Flight) -> Self {
        let crew_id = crew_id.into();
        Self {
            violation_type: ViolationType::BrokenContinuity,
            message: format!(
                "Illegal connection for Crew {crew_id}: {} does not match {}",
                prev.destination(),
                next.origin()
            ),
            crew_id,
            flight_id: next.id().to_string(),
        }
    }

    /// Creates a rest violation (`gap_minutes` below `min_minutes`).
    pub fn insufficient_rest(
        crew_id: impl Into<String>,
        next: &Flight,
        gap_minutes: i64,
        min_minutes: i64,
    ) -> Self {
        let crew_id = crew_id.into();
        Self {
            violation_type: ViolationType::InsufficientRest,
            message: format!(
                "Insufficient rest for Crew {crew_id}: only {gap_minutes} minutes (minimum {min_minutes})"
            ),
            crew_id,
            flight_id: next.id().to_string(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
