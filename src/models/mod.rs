//! Rostering domain models.
//!
//! Provides the core data types: flights and crew as immutable inputs,
//! the roster as the assignment ledger, and legality violations.
//!
//! # Domain Mappings
//!
//! | crew-roster | Generic scheduling |
//! |-------------|--------------------|
//! | Flight | Activity with fixed start/end |
//! | Crew | Resource with skills |
//! | Qualification | Skill |
//! | Roster | Schedule |

mod crew;
mod flight;
mod roster;

pub use crew::{index_crew, Crew};
pub use flight::{Flight, FlightRecord};
pub use roster::{Roster, Violation, ViolationType};
