//! Legality validation of crew flight sequences.
//!
//! Three rules apply to each crew's sequence, in this order:
//! 1. **Qualification**: every flight's aircraft type is in the crew's
//!    qualification set.
//! 2. **Continuity**: each flight departs where the previous one arrived.
//! 3. **Minimum rest**: each departure is at least `min_rest_minutes` after
//!    the previous arrival.
//!
//! Qualification is checked over the whole sequence first; continuity and
//! rest are then checked pair by pair. Validation stops at the first
//! violation.
//!
//! Every rule compares flights within a single crew's sequence, so a crew's
//! legality never depends on another crew. `validate_sequence` exposes that
//! crew-local check for trial validation against a snapshot.

use chrono::Duration;
use std::collections::HashMap;

use crate::config::LegalityRules;
use crate::models::{Crew, Flight, Roster, Violation};

/// Validates every crew sequence in the roster.
///
/// Crews are examined in ascending crew id order. Returns the first
/// violation found, or `Ok(())` if the whole roster is legal.
///
/// # Example
///
/// ```
/// use crew_roster::config::LegalityRules;
/// use crew_roster::legality::validate_roster;
/// use crew_roster::models::{index_crew, Crew, Flight, Roster};
///
/// let crew = vec![Crew::new("C001", "JFK").with_qualification("B747")];
/// let mut roster = Roster::new();
/// roster.assign("C001", Flight::parse(
///     "FL001", "JFK", "LHR", "2024-02-01T08:00:00Z", "2024-02-01T20:00:00Z", "B747",
/// ).unwrap());
/// roster.assign("C001", Flight::parse(
///     "FL004", "LHR", "CDG", "2024-02-01T20:45:00Z", "2024-02-01T22:00:00Z", "B747",
/// ).unwrap());
///
/// let err = validate_roster(&roster, &index_crew(&crew), &LegalityRules::default()).unwrap_err();
/// assert!(err.message.contains("45 minutes"));
/// ```
pub fn validate_roster(
    roster: &Roster,
    crew_lookup: &HashMap<&str, &Crew>,
    rules: &LegalityRules,
) -> Result<(), Violation> {
    for (crew_id, flights) in roster.schedule() {
        let sequence: Vec<&Flight> = flights.iter().collect();
        let crew = crew_lookup.get(crew_id.as_str()).copied();
        validate_sequence(crew_id, crew, &sequence, rules)?;
    }
    Ok(())
}

/// Validates one crew's flight sequence (ordered by departure).
///
/// `crew` is `None` when the id is missing from the lookup; a non-empty
/// sequence for an unknown crew is a violation.
pub fn validate_sequence(
    crew_id: &str,
    crew: Option<&Crew>,
    flights: &[&Flight],
    rules: &LegalityRules,
) -> Result<(), Violation> {
    let Some(crew) = crew else {
        return match flights.first() {
            Some(first) => Err(Violation::unknown_crew(crew_id, first.id())),
            None => Ok(()),
        };
    };

    if let Some(flight) = flights.iter().find(|f| !crew.is_qualified_for(f.aircraft())) {
        return Err(Violation::unqualified(crew_id, flight));
    }

    // An unrepresentable minimum means no gap is long enough.
    let min_rest = Duration::try_minutes(rules.min_rest_minutes);
    for pair in flights.windows(2) {
        let (prev, next) = (pair[0], pair[1]);

        if prev.destination() != next.origin() {
            return Err(Violation::broken_continuity(crew_id, prev, next));
        }

        let gap = next.departure() - prev.arrival();
        if min_rest.map_or(true, |min| gap < min) {
            return Err(Violation::insufficient_rest(
                crew_id,
                next,
                gap.num_minutes(),
                rules.min_rest_minutes,
            ));
        }
    }

    Ok(())
}
