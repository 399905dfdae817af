//! Domain types for the route risk server.
//!
//! This module contains the value types shared by the topology, scorer
//! and planner. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod day;
mod preference;
mod station;

pub use day::{DayOfWeek, InvalidDayOfWeek};
pub use preference::{InvalidTimePreference, TimePreference};
pub use station::{InvalidLineCode, LineCode, Station};
