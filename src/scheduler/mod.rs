//! Greedy roster scheduler and coverage KPIs.
//!
//! # Algorithm
//!
//! `GreedyScheduler` is a single-pass, first-fit heuristic: flights in
//! departure order, crew in supplied order, commit on the first legal
//! trial. It does not minimise unassigned flights, balance workload, or
//! revisit committed flights.
//!
//! # KPI
//!
//! `RosterKpi` reports coverage, active/idle crew, and block minutes for
//! a finished roster.

mod greedy;
mod kpi;

pub use greedy::{GreedyScheduler, RosterRequest};
pub use kpi::RosterKpi;
