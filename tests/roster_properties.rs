//! Property tests for rosters built by the greedy scheduler.

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use crew_roster::config::{LegalityRules, ValidationScope};
use crew_roster::export::RosterExport;
use crew_roster::legality::validate_roster;
use crew_roster::models::{index_crew, Crew, Flight};
use crew_roster::scheduler::GreedyScheduler;

const AIRPORTS: [&str; 3] = ["JFK", "LHR", "CDG"];
const AIRCRAFT: [&str; 2] = ["B747", "A320"];

fn arb_flights() -> impl Strategy<Value = Vec<Flight>> {
    prop::collection::vec(
        (0..3usize, 0..3usize, 0..48i64, 1..12i64, 0..2usize),
        0..16,
    )
    .prop_map(|legs| {
        let base = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        legs
            .into_iter()
            .enumerate()
            .map(|(i, (origin, dest, slot, blocks, aircraft))| {
                let departure = base + Duration::minutes(slot * 30);
                let arrival = departure + Duration::minutes(blocks * 30);
                Flight::new(
                    format!("FL{i:03}"),
                    AIRPORTS[origin],
                    AIRPORTS[dest],
                    departure,
                    arrival,
                    AIRCRAFT[aircraft],
                )
                .unwrap()
            })
            .collect()
    })
}

fn arb_crew() -> impl Strategy<Value = Vec<Crew>> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 1..5).prop_map(|quals| {
        quals
            .into_iter()
            .enumerate()
            .map(|(i, (b747, a320))| {
                let mut crew = Crew::new(format!("C{i:03}"), "JFK");
                if b747 {
                    crew = crew.with_qualification("B747");
                }
                if a320 {
                    crew = crew.with_qualification("A320");
                }
                crew
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_flight_placed_exactly_once(flights in arb_flights(), crew in arb_crew()) {
        let roster = GreedyScheduler::new().schedule(&flights, &crew);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for ids in roster.schedule().values() {
            for f in ids {
                *seen.entry(f.id()).or_default() += 1;
            }
        }
        for f in roster.unassigned() {
            *seen.entry(f.id()).or_default() += 1;
        }

        prop_assert_eq!(seen.len(), flights.len());
        for f in &flights {
            prop_assert_eq!(seen.get(f.id()).copied(), Some(1));
        }
    }

    #[test]
    fn committed_sequences_obey_the_rules(flights in arb_flights(), crew in arb_crew()) {
        let roster = GreedyScheduler::new().schedule(&flights, &crew);
        let lookup = index_crew(&crew);

        prop_assert!(validate_roster(&roster, &lookup, &LegalityRules::default()).is_ok());

        for (crew_id, seq) in roster.schedule() {
            let member = lookup[crew_id.as_str()];
            for f in seq {
                prop_assert!(member.is_qualified_for(f.aircraft()));
            }
            for pair in seq.windows(2) {
                prop_assert_eq!(pair[0].destination(), pair[1].origin());
                prop_assert!(pair[1].departure() - pair[0].arrival() >= Duration::minutes(60));
                prop_assert!(pair[0].departure() < pair[1].departure());
            }
        }
    }

    #[test]
    fn scheduling_is_deterministic(flights in arb_flights(), crew in arb_crew()) {
        let scheduler = GreedyScheduler::new();
        let first = scheduler.schedule(&flights, &crew);
        let second = scheduler.schedule(&flights, &crew);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            RosterExport::new(&first).unwrap().to_json_string().unwrap(),
            RosterExport::new(&second).unwrap().to_json_string().unwrap()
        );
    }

    #[test]
    fn crew_and_roster_scopes_agree(flights in arb_flights(), crew in arb_crew()) {
        let scoped = GreedyScheduler::new()
            .with_validation_scope(ValidationScope::Crew)
            .schedule(&flights, &crew);
        let whole = GreedyScheduler::new()
            .with_validation_scope(ValidationScope::Roster)
            .schedule(&flights, &crew);

        prop_assert_eq!(scoped, whole);
    }
}
