//! Crew member model.
//!
//! A crew member has a home base and a set of aircraft-type qualifications.
//! The home base is carried for callers but is not part of the legality rules.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A crew member who can be assigned to flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    /// Unique crew identifier (e.g., "C001").
    pub id: String,
    /// Home base location code (e.g., "JFK").
    pub home_base: String,
    /// Aircraft types this crew member is certified to work.
    #[serde(default)]
    pub qualifications: BTreeSet<String>,
}

impl Crew {
    /// Creates a crew member with no qualifications.
    pub fn new(id: impl Into<String>, home_base: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            home_base: home_base.into(),
            qualifications: BTreeSet::new(),
        }
    }

    /// Adds one aircraft-type qualification.
    pub fn with_qualification(mut self, aircraft: impl Into<String>) -> Self {
        self.qualifications.insert(aircraft.into());
        self
    }

    /// Adds qualifications from a semicolon-separated list (e.g., "B747;A320").
    ///
    /// Items are trimmed; empty items are ignored.
    pub fn with_qualifications_str(mut self, list: &str) -> Self {
        self.qualifications.extend(
            list.split(';')
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(String::from),
        );
        self
    }

    /// Whether this crew member may work the given aircraft type.
    #[inline]
    pub fn is_qualified_for(&self, aircraft: &str) -> bool {
        self.qualifications.contains(aircraft)
    }
}

/// Builds the crew lookup (crew id → crew) used by legality validation.
///
/// If ids repeat, the last entry wins; `validation::validate_input`
/// reports duplicates.
pub fn index_crew(crew: &[Crew]) -> HashMap<&str, &Crew> {
    crew.iter().map(|c| (c.id.as_str(), c)).collect()
}
