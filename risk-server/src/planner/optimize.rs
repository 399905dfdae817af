//! Transfer-aware route enumeration.
//!
//! Candidates between two stations are the direct route plus one route
//! through each known transfer station between the two lines. Each is
//! scored by the [`RouteEvaluator`] and the results are ranked by risk.

use tracing::debug;

use crate::domain::{DayOfWeek, TimePreference};
use crate::scorer::RiskScorer;
use crate::topology::{StationTopology, TransferTable};

use super::config::RouteConfig;
use super::evaluate::{EvaluateError, RouteEvaluator, ScoredRoute};
use super::rank::rank_routes;

/// Error from route optimisation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    /// Start or end station is not in the topology
    #[error("invalid station: {0}")]
    InvalidStation(String),

    /// A candidate route could not be evaluated
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Request for route optimisation.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Station the journey starts at.
    pub start: String,

    /// Station the journey ends at.
    pub end: String,

    /// Day of travel.
    pub day: DayOfWeek,

    /// Time-of-day preference.
    pub preference: TimePreference,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        day: DayOfWeek,
        preference: TimePreference,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            day,
            preference,
        }
    }
}

/// Finds and ranks candidate routes between two stations.
pub struct RouteOptimizer<'a, S: RiskScorer + ?Sized> {
    evaluator: RouteEvaluator<'a, S>,
    transfers: &'a TransferTable,
}

impl<'a, S: RiskScorer + ?Sized> RouteOptimizer<'a, S> {
    /// Create a new optimizer.
    pub fn new(
        topology: &'a StationTopology,
        transfers: &'a TransferTable,
        scorer: &'a S,
        config: &'a RouteConfig,
    ) -> Self {
        Self {
            evaluator: RouteEvaluator::new(topology, scorer, config),
            transfers,
        }
    }

    /// Candidate station sequences between two stations, direct route first.
    ///
    /// When both stations are the same the only candidate is that single
    /// station. A transfer station equal to either endpoint would repeat a
    /// station, so such candidates are skipped.
    pub fn candidates(&self, start: &str, end: &str) -> Result<Vec<Vec<String>>, OptimizeError> {
        let topology = self.evaluator.topology();
        let start_station = topology
            .lookup(start)
            .ok_or_else(|| OptimizeError::InvalidStation(start.to_string()))?;
        let end_station = topology
            .lookup(end)
            .ok_or_else(|| OptimizeError::InvalidStation(end.to_string()))?;

        if start == end {
            return Ok(vec![vec![start.to_string()]]);
        }

        let mut candidates = vec![vec![start.to_string(), end.to_string()]];

        for transfer in self
            .transfers
            .find_transfer_stations(&start_station.line, &end_station.line)
        {
            if transfer == start || transfer == end {
                debug!(%transfer, start, end, "skipping transfer at route endpoint");
                continue;
            }
            candidates.push(vec![start.to_string(), transfer.clone(), end.to_string()]);
        }

        Ok(candidates)
    }

    /// Score every candidate route and return them best first.
    pub fn optimize(&self, request: &RouteRequest) -> Result<Vec<ScoredRoute>, OptimizeError> {
        let candidates = self.candidates(&request.start, &request.end)?;

        let routes = candidates
            .iter()
            .map(|stations| {
                self.evaluator
                    .evaluate(stations, request.day, request.preference)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            start = %request.start,
            end = %request.end,
            day = %request.day,
            preference = %request.preference,
            candidates = routes.len(),
            "optimized route"
        );

        Ok(rank_routes(routes))
    }
}
