//! First-fit greedy roster scheduler.
//!
//! # Algorithm
//!
//! 1. Sort flights by departure (stable: equal departures keep input order).
//! 2. For each flight, walk the crew list in the order supplied.
//! 3. Skip candidates lacking the aircraft qualification without a trial.
//! 4. Trial-assign the flight to the candidate and validate legality.
//! 5. Commit on the first legal trial; otherwise try the next candidate.
//! 6. A flight no candidate accepts is recorded as unassigned.
//!
//! There is no backtracking across flights and no scoring of candidates:
//! crew order is the tie-break policy.
//!
//! # Complexity
//! Crew-scoped trials: O(n * c * k) where n=flights, c=crew, k=longest
//! crew sequence. Roster-scoped trials re-validate all assigned flights,
//! O(n² * c).

use std::collections::{HashMap, HashSet};

use crate::config::{LegalityRules, SchedulerConfig, ValidationScope};
use crate::legality::{validate_roster, validate_sequence};
use crate::models::{index_crew, Crew, Flight, Roster};
use crate::validation::{validate_input, ValidationError};

use super::RosterKpi;

/// Input container for a rostering run.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    /// Flights to cover.
    pub flights: Vec<Flight>,
    /// Crew candidates, in first-come-first-served order.
    pub crew: Vec<Crew>,
    /// Run configuration.
    pub config: SchedulerConfig,
}

impl RosterRequest {
    /// Creates a request with the default configuration.
    pub fn new(flights: Vec<Flight>, crew: Vec<Crew>) -> Self {
        Self {
            flights,
            crew,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the run configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }
}

/// First-fit greedy crew scheduler.
///
/// # Example
///
/// ```
/// use crew_roster::models::{Crew, Flight};
/// use crew_roster::scheduler::GreedyScheduler;
///
/// let flights = vec![
///     Flight::parse("FL001", "JFK", "LHR", "2024-02-01T08:00:00Z", "2024-02-01T20:00:00Z", "B747").unwrap(),
///     Flight::parse("FL002", "LHR", "CDG", "2024-02-01T21:30:00Z", "2024-02-01T23:00:00Z", "B747").unwrap(),
///     Flight::parse("FL003", "JFK", "BOS", "2024-02-01T09:00:00Z", "2024-02-01T10:00:00Z", "A380").unwrap(),
/// ];
/// let crew = vec![Crew::new("C001", "JFK").with_qualification("B747")];
///
/// let roster = GreedyScheduler::new().schedule(&flights, &crew);
/// assert_eq!(roster.flight_ids_for("C001"), vec!["FL001", "FL002"]);
/// assert_eq!(roster.unassigned_ids(), vec!["FL003"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    config: SchedulerConfig,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whole configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the legality rules.
    pub fn with_rules(mut self, rules: LegalityRules) -> Self {
        self.config.rules = rules;
        self
    }

    /// Sets the trial validation scope.
    pub fn with_validation_scope(mut self, scope: ValidationScope) -> Self {
        self.config.validation_scope = scope;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Assigns flights to crew and returns the finished roster.
    ///
    /// Never fails: flights without a legal candidate end up in
    /// `Roster::unassigned`.
    pub fn schedule(&self, flights: &[Flight], crew: &[Crew]) -> Roster {
        let crew_lookup = index_crew(crew);
        let mut roster = Roster::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for flight in sort_flights(flights) {
            if !seen.insert(flight.id()) {
                tracing::warn!(flight_id = %flight.id(), "duplicate flight id skipped");
                continue;
            }
            let mut placed = false;

            for candidate in crew {
                if !candidate.is_qualified_for(flight.aircraft()) {
                    continue;
                }
                if self.try_assign(&mut roster, &crew_lookup, &candidate.id, flight) {
                    placed = true;
                    break;
                }
            }

            if !placed {
                tracing::debug!(flight_id = %flight.id(), "no legal crew candidate");
                if let Err(err) = roster.record_unassigned(flight.clone()) {
                    tracing::warn!(%err, "flight already placed");
                }
            }
        }

        let kpi = RosterKpi::calculate(&roster, crew);
        tracing::info!(
            flights = flights.len(),
            assigned = kpi.assigned_flights,
            unassigned = kpi.unassigned_flights,
            active_crew = kpi.active_crew,
            idle_crew = kpi.idle_crew.len(),
            coverage = kpi.coverage_rate,
            "roster built"
        );

        roster
    }

    /// Validates input integrity, then schedules.
    ///
    /// Returns every input problem instead of a roster when validation fails.
    pub fn schedule_validated(
        &self,
        flights: &[Flight],
        crew: &[Crew],
    ) -> Result<Roster, Vec<ValidationError>> {
        validate_input(flights, crew)?;
        Ok(self.schedule(flights, crew))
    }

    /// Schedules a request using the request's own configuration.
    pub fn schedule_request(&self, request: &RosterRequest) -> Roster {
        let scheduler = Self {
            config: request.config.clone(),
        };
        scheduler.schedule(&request.flights, &request.crew)
    }

    /// Trials `flight` on crew `crew_id`; commits and returns `true` if legal.
    fn try_assign(
        &self,
        roster: &mut Roster,
        crew_lookup: &HashMap<&str, &Crew>,
        crew_id: &str,
        flight: &Flight,
    ) -> bool {
        let rules = &self.config.rules;
        let verdict = match self.config.validation_scope {
            ValidationScope::Crew => {
                let current = roster.flights_for(crew_id);
                let pos = current.partition_point(|f| f.departure() <= flight.departure());
                let mut trial: Vec<&Flight> = current.iter().collect();
                trial.insert(pos, flight);
                let crew = crew_lookup.get(crew_id).copied();
                let verdict = validate_sequence(crew_id, crew, &trial, rules);
                if verdict.is_ok() {
                    roster.assign(crew_id, flight.clone());
                }
                verdict
            }
            ValidationScope::Roster => {
                roster.assign(crew_id, flight.clone());
                let verdict = validate_roster(roster, crew_lookup, rules);
                if verdict.is_err() {
                    let removed = roster.unassign_last(crew_id);
                    debug_assert_eq!(removed.as_ref().map(Flight::id), Some(flight.id()));
                }
                verdict
            }
        };

        match verdict {
            Ok(()) => {
                tracing::debug!(flight_id = %flight.id(), crew_id, "flight committed");
                true
            }
            Err(violation) => {
                tracing::debug!(
                    flight_id = %flight.id(),
                    crew_id,
                    reason = %violation,
                    "trial rejected"
                );
                false
            }
        }
    }
}

/// Flights in ascending departure order; ties keep input order.
fn sort_flights(flights: &[Flight]) -> Vec<&Flight> {
    let mut order: Vec<&Flight> = flights.iter().collect();
    order.sort_by_key(|f| f.departure());
    order
}
