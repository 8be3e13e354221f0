//! Input validation for rostering problems.
//!
//! Checks structural integrity of flights and crew before scheduling.
//! Detects:
//! - Duplicate flight and crew IDs
//! - Crew IDs colliding with the reserved `"unassigned"` export key
//! - Location codes that are not three ASCII letters
//!
//! Flight timing is not re-checked here: a `Flight` cannot be constructed
//! with arrival at or before departure.

use crate::export::UNASSIGNED_KEY;
use crate::models::{Crew, Flight};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A crew ID equals the reserved `"unassigned"` key.
    ReservedCrewId,
    /// A location code is not three ASCII letters.
    InvalidLocationCode,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a rostering run.
///
/// Checks:
/// 1. No duplicate flight IDs
/// 2. No duplicate crew IDs
/// 3. No crew ID equal to `"unassigned"`
/// 4. Flight origin/destination and crew home base are 3-letter codes
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(flights: &[Flight], crew: &[Crew]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut flight_ids = HashSet::new();
    for f in flights {
        if !flight_ids.insert(f.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate flight ID: {}", f.id()),
            ));
        }
        for (field, code) in [("origin", f.origin()), ("destination", f.destination())] {
            if !is_location_code(code) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidLocationCode,
                    format!("Flight '{}' has invalid {field} code '{code}'", f.id()),
                ));
            }
        }
    }

    let mut crew_ids = HashSet::new();
    for c in crew {
        if !crew_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate crew ID: {}", c.id),
            ));
        }
        if c.id == UNASSIGNED_KEY {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedCrewId,
                format!("Crew ID '{}' is reserved for unassigned flights", c.id),
            ));
        }
        if !is_location_code(&c.home_base) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLocationCode,
                format!("Crew '{}' has invalid home base code '{}'", c.id, c.home_base),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_location_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str, origin: &str, dest: &str) -> Flight {
        Flight::parse(
            id,
            origin,
            dest,
            "2024-02-01T08:00:00Z",
            "2024-02-01T10:00:00Z",
            "B747",
        )
        .unwrap()
    }

    fn sample_crew() -> Vec<Crew> {
        vec![
            Crew::new("C001", "JFK").with_qualification("B747"),
            Crew::new("C002", "LHR").with_qualification("A320"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let flights = vec![flight("FL001", "JFK", "LHR"), flight("FL002", "LHR", "CDG")];
        assert!(validate_input(&flights, &sample_crew()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_flight_id() {
        let flights = vec![flight("FL001", "JFK", "LHR"), flight("FL001", "LHR", "CDG")];
        let errors = validate_input(&flights, &sample_crew()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("flight")));
    }

    #[test]
    fn test_duplicate_crew_id() {
        let crew = vec![Crew::new("C001", "JFK"), Crew::new("C001", "LHR")];
        let errors = validate_input(&[], &crew).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("crew")));
    }

    #[test]
    fn test_reserved_crew_id() {
        let crew = vec![Crew::new("unassigned", "JFK")];
        let errors = validate_input(&[], &crew).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ReservedCrewId);
    }

    #[test]
    fn test_invalid_location_codes() {
        let flights = vec![flight("FL001", "JFK1", "LH")];
        let crew = vec![Crew::new("C001", "")];
        let errors = validate_input(&flights, &crew).unwrap_err();
        let bad: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidLocationCode)
            .collect();
        assert_eq!(bad.len(), 3);
    }

    #[test]
    fn test_multiple_errors() {
        let flights = vec![flight("FL001", "JFK", "LHR"), flight("FL001", "LHR", "CDG")];
        let crew = vec![Crew::new("unassigned", "JFK"), Crew::new("C001", "XX")];
        let errors = validate_input(&flights, &crew).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
