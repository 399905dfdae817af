//! Route planner ranking candidate routes by delay risk.
//!
//! This module answers: "Which way from station A to station B is least
//! likely to be delayed?"
//!
//! Candidates are the direct route and one route through each known transfer
//! station between the two lines. Each candidate's risk is the average of
//! its stations' delay probabilities, scaled for the time of day.

mod config;
mod evaluate;
mod optimize;
mod rank;

pub use config::{MECHANICAL_ISSUE, RouteConfig};
pub use evaluate::{EvaluateError, RouteEvaluator, ScoredRoute, StationRisk};
pub use optimize::{OptimizeError, RouteOptimizer, RouteRequest};
pub use rank::rank_routes;
