//! Risk and time estimation for a single route.

use tracing::{debug, trace};

use crate::domain::{DayOfWeek, Station, TimePreference};
use crate::scorer::RiskScorer;
use crate::topology::StationTopology;

use super::config::RouteConfig;

/// Error from route evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    /// A route must name at least one station
    #[error("route has no stations")]
    EmptyRoute,
}

/// A route with its aggregate risk and estimated travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoute {
    /// Stations in travel order.
    pub stations: Vec<String>,

    /// Average per-station delay probability, scaled by the time preference.
    ///
    /// This is a ranking score, not a calibrated probability: it is not
    /// clamped, so rush-hour routes can score above 1.0.
    pub total_delay_risk: f64,

    /// Estimated travel time in whole minutes (rounded down).
    pub estimated_time_mins: u32,
}

/// A station with its individual delay probability.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRisk<'a> {
    pub station: &'a Station,
    pub probability: f64,
}

/// Scores ordered station sequences.
pub struct RouteEvaluator<'a, S: RiskScorer + ?Sized> {
    topology: &'a StationTopology,
    scorer: &'a S,
    config: &'a RouteConfig,
}

impl<'a, S: RiskScorer + ?Sized> RouteEvaluator<'a, S> {
    /// Create a new evaluator.
    pub fn new(topology: &'a StationTopology, scorer: &'a S, config: &'a RouteConfig) -> Self {
        Self {
            topology,
            scorer,
            config,
        }
    }

    /// The topology this evaluator scores against.
    pub fn topology(&self) -> &'a StationTopology {
        self.topology
    }

    /// Delay probability for one station.
    ///
    /// Falls back to the configured default risk when the station is not in
    /// the topology or the scorer cannot score it.
    pub fn station_risk(&self, name: &str, day: DayOfWeek) -> f64 {
        let Some(station) = self.topology.lookup(name) else {
            debug!(station = name, "station not in topology, using default risk");
            return self.config.default_risk;
        };

        match self.scorer.score(
            station.line.as_str(),
            &station.name,
            &self.config.condition_code,
            day,
        ) {
            Ok(probability) => {
                trace!(station = name, probability, "scored station");
                probability
            }
            Err(e) => {
                debug!(station = name, error = %e, "scorer failed, using default risk");
                self.config.default_risk
            }
        }
    }

    /// Score an ordered route.
    ///
    /// Risk is the mean of the per-station probabilities; time counts a dwell
    /// at the first and last station and a transfer at each one in between.
    /// Both are then scaled by the time preference.
    pub fn evaluate<N: AsRef<str>>(
        &self,
        stations: &[N],
        day: DayOfWeek,
        preference: TimePreference,
    ) -> Result<ScoredRoute, EvaluateError> {
        if stations.is_empty() {
            return Err(EvaluateError::EmptyRoute);
        }

        let last = stations.len() - 1;
        let mut risk_sum = 0.0;
        let mut minutes = 0u32;

        for (i, name) in stations.iter().enumerate() {
            risk_sum += self.station_risk(name.as_ref(), day);

            minutes += if i == 0 || i == last {
                self.config.dwell_mins
            } else {
                self.config.transfer_mins
            };
        }

        let average_risk = risk_sum / stations.len() as f64;

        Ok(ScoredRoute {
            stations: stations.iter().map(|s| s.as_ref().to_string()).collect(),
            total_delay_risk: average_risk * preference.risk_multiplier(),
            estimated_time_mins: (minutes as f64 * preference.time_multiplier()).floor() as u32,
        })
    }

    /// Delay probability for every station in the topology, in topology order.
    pub fn station_risks(&self, day: DayOfWeek) -> Vec<StationRisk<'a>> {
        self.topology
            .iter()
            .map(|station| StationRisk {
                station,
                probability: self.station_risk(&station.name, day),
            })
            .collect()
    }
}
