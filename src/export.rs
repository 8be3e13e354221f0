//! Canonical roster export.
//!
//! A roster serializes as one JSON object: each crew id maps to the ids of
//! its flights in departure order, followed by the reserved key
//! `"unassigned"` holding the ids of flights nobody could take.
//!
//! ```json
//! {
//!   "C001": ["FL001", "FL003"],
//!   "C002": ["FL002"],
//!   "unassigned": ["FL004"]
//! }
//! ```
//!
//! A crew literally named `"unassigned"` would make that object ambiguous,
//! so `RosterExport::new` rejects it.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, RosterError};
use crate::models::{Flight, Roster};

/// Reserved export key for unassigned flights.
pub const UNASSIGNED_KEY: &str = "unassigned";

/// Serializable view of a finished roster.
#[derive(Debug, Clone, Copy)]
pub struct RosterExport<'a> {
    roster: &'a Roster,
}

impl<'a> RosterExport<'a> {
    /// Wraps a roster for export, rejecting the reserved-key collision.
    pub fn new(roster: &'a Roster) -> Result<Self> {
        if roster.schedule().contains_key(UNASSIGNED_KEY) {
            return Err(RosterError::ReservedCrewId(UNASSIGNED_KEY.to_string()));
        }
        Ok(Self { roster })
    }

    /// Renders compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders indented JSON.
    ///
    /// ```
    /// use crew_roster::export::RosterExport;
    /// use crew_roster::models::{Flight, Roster};
    ///
    /// let mut roster = Roster::new();
    /// roster.assign("C001", Flight::parse(
    ///     "FL001", "JFK", "LHR", "2024-02-01T08:00:00Z", "2024-02-01T20:00:00Z", "B747",
    /// ).unwrap());
    ///
    /// let json = RosterExport::new(&roster).unwrap().to_json_pretty().unwrap();
    /// assert!(json.contains("\"C001\""));
    /// assert!(json.contains("\"unassigned\": []"));
    /// ```
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders a `serde_json::Value`.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for RosterExport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let schedule = self.roster.schedule();
        let mut map = serializer.serialize_map(Some(schedule.len() + 1))?;
        for (crew_id, flights) in schedule {
            map.serialize_entry(crew_id, &flight_ids(flights))?;
        }
        map.serialize_entry(UNASSIGNED_KEY, &flight_ids(self.roster.unassigned()))?;
        map.end()
    }
}

fn flight_ids(flights: &[Flight]) -> Vec<&str> {
    flights.iter().map(Flight::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str, dep: &str, arr: &str) -> Flight {
        Flight::parse(
            id,
            "JFK",
            "JFK",
            &format!("2024-02-01T{dep}:00Z"),
            &format!("2024-02-01T{arr}:00Z"),
            "B747",
        )
        .unwrap()
    }

    fn sample_roster() -> Roster {
        let mut r = Roster::new();
        r.assign("C002", flight("FL002", "09:00", "10:00"));
        r.assign("C001", flight("FL003", "12:00", "13:00"));
        r.assign("C001", flight("FL001", "08:00", "09:00"));
        r.record_unassigned(flight("FL004", "14:00", "15:00")).unwrap();
        r
    }

    #[test]
    fn test_export_layout() {
        let r = sample_roster();
        let json = RosterExport::new(&r).unwrap().to_json_string().unwrap();
        assert_eq!(
            json,
            r#"{"C001":["FL001","FL003"],"C002":["FL002"],"unassigned":["FL004"]}"#
        );
    }

    #[test]
    fn test_export_value() {
        let r = sample_roster();
        let value = RosterExport::new(&r).unwrap().to_json_value().unwrap();
        assert_eq!(value["C001"], serde_json::json!(["FL001", "FL003"]));
        assert_eq!(value["unassigned"], serde_json::json!(["FL004"]));
    }

    #[test]
    fn test_export_empty_roster() {
        let r = Roster::new();
        let json = RosterExport::new(&r).unwrap().to_json_string().unwrap();
        assert_eq!(json, r#"{"unassigned":[]}"#);
    }

    #[test]
    fn test_reserved_crew_id_rejected() {
        let mut r = Roster::new();
        r.assign(UNASSIGNED_KEY, flight("FL001", "08:00", "09:00"));
        let err = RosterExport::new(&r).unwrap_err();
        assert!(matches!(err, RosterError::ReservedCrewId(ref id) if id == "unassigned"));
    }
}
