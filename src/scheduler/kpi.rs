//! Roster coverage metrics (KPIs).
//!
//! Computes reporting indicators from a finished roster. These numbers
//! describe a run; the scheduler never uses them to steer assignment.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage Rate | assigned / (assigned + unassigned) |
//! | Active Crew | Crews holding at least one flight |
//! | Idle Crew | Supplied crews holding no flight |
//! | Block Minutes | Sum of flight durations per crew |
//! | Avg Flights | Mean flights per active crew |

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Crew, Roster};

/// Roster coverage indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Flights placed anywhere in the roster.
    pub total_flights: usize,
    /// Flights assigned to some crew.
    pub assigned_flights: usize,
    /// Flights nobody could take.
    pub unassigned_flights: usize,
    /// Fraction of flights assigned (0.0..1.0; 1.0 for an empty roster).
    pub coverage_rate: f64,
    /// Crews holding at least one flight.
    pub active_crew: usize,
    /// Supplied crew ids with no flights, ascending.
    pub idle_crew: Vec<String>,
    /// Flights per active crew.
    pub flights_by_crew: BTreeMap<String, usize>,
    /// Block minutes per active crew.
    pub block_minutes_by_crew: BTreeMap<String, i64>,
    /// Mean flights per active crew (0.0 if none).
    pub avg_flights_per_crew: f64,
}

impl RosterKpi {
    /// Computes KPIs from a roster and the crew that were offered.
    pub fn calculate(roster: &Roster, crew: &[Crew]) -> Self {
        let assigned = roster.assigned_count();
        let unassigned = roster.unassigned_count();
        let total = assigned + unassigned;

        let mut flights_by_crew: BTreeMap<String, usize> = BTreeMap::new();
        let mut block_minutes_by_crew: BTreeMap<String, i64> = BTreeMap::new();
        for (crew_id, flights) in roster.schedule() {
            flights_by_crew.insert(crew_id.clone(), flights.len());
            block_minutes_by_crew.insert(
                crew_id.clone(),
                flights.iter().map(|f| f.duration_minutes()).sum(),
            );
        }

        let idle_crew: BTreeSet<String> = crew
            .iter()
            .filter(|c| !roster.schedule().contains_key(&c.id))
            .map(|c| c.id.clone())
            .collect();

        let coverage_rate = if total == 0 {
            1.0
        } else {
            assigned as f64 / total as f64
        };

        let active_crew = roster.crew_count();
        let avg_flights_per_crew = if active_crew == 0 {
            0.0
        } else {
            assigned as f64 / active_crew as f64
        };

        Self {
            total_flights: total,
            assigned_flights: assigned,
            unassigned_flights: unassigned,
            coverage_rate,
            active_crew,
            idle_crew: idle_crew.into_iter().collect(),
            flights_by_crew,
            block_minutes_by_crew,
            avg_flights_per_crew,
        }
    }

    /// Whether coverage reaches the given rate.
    pub fn meets_coverage(&self, min_rate: f64) -> bool {
        self.coverage_rate >= min_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flight;

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

    fn sample_crew() -> Vec<Crew> {
        vec![
            Crew::new("C001", "JFK"),
            Crew::new("C002", "JFK"),
            Crew::new("C003", "JFK"),
        ]
    }

    #[test]
    fn test_kpi_basic() {
        let mut r = Roster::new();
        r.assign("C001", flight("FL001", "08:00", "10:00"));
        r.assign("C001", flight("FL002", "11:00", "11:30"));
        r.assign("C002", flight("FL003", "08:00", "09:00"));
        r.record_unassigned(flight("FL004", "09:00", "10:00")).unwrap();

        let kpi = RosterKpi::calculate(&r, &sample_crew());
        assert_eq!(kpi.total_flights, 4);
        assert_eq!(kpi.assigned_flights, 3);
        assert_eq!(kpi.unassigned_flights, 1);
        assert!((kpi.coverage_rate - 0.75).abs() < 1e-10);
        assert_eq!(kpi.active_crew, 2);
        assert_eq!(kpi.idle_crew, vec!["C003".to_string()]);
        assert_eq!(kpi.flights_by_crew["C001"], 2);
        assert_eq!(kpi.block_minutes_by_crew["C001"], 150);
        assert_eq!(kpi.block_minutes_by_crew["C002"], 60);
        assert!((kpi.avg_flights_per_crew - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RosterKpi::calculate(&Roster::new(), &[]);
        assert_eq!(kpi.total_flights, 0);
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_flights_per_crew - 0.0).abs() < 1e-10);
        assert!(kpi.idle_crew.is_empty());
    }

    #[test]
    fn test_kpi_all_unassigned() {
        let mut r = Roster::new();
        r.record_unassigned(flight("FL001", "08:00", "10:00")).unwrap();
        let kpi = RosterKpi::calculate(&r, &sample_crew());
        assert!((kpi.coverage_rate - 0.0).abs() < 1e-10);
        assert_eq!(kpi.idle_crew.len(), 3);
    }

    #[test]
    fn test_meets_coverage() {
        let mut r = Roster::new();
        r.assign("C001", flight("FL001", "08:00", "10:00"));
        r.record_unassigned(flight("FL002", "09:00", "10:00")).unwrap();

        let kpi = RosterKpi::calculate(&r, &sample_crew());
        assert!(kpi.meets_coverage(0.5));
        assert!(!kpi.meets_coverage(0.51));
    }
}
