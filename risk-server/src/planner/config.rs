//! Route evaluation configuration.

/// Condition code for mechanical issues, the most common delay cause.
pub const MECHANICAL_ISSUE: &str = "MUIS";

/// Constants used when scoring routes.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Risk assumed for a station the scorer does not recognise,
    /// or that is missing from the topology.
    pub default_risk: f64,

    /// Boarding/alighting time at the first and last station (minutes).
    pub dwell_mins: u32,

    /// Time spent at each intermediate station (minutes).
    pub transfer_mins: u32,

    /// Condition code passed to the scorer for every station.
    pub condition_code: String,

    /// Probability at or above which a major delay is predicted.
    pub prediction_threshold: f64,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_risk: f64,
        dwell_mins: u32,
        transfer_mins: u32,
        condition_code: impl Into<String>,
        prediction_threshold: f64,
    ) -> Self {
        Self {
            default_risk,
            dwell_mins,
            transfer_mins,
            condition_code: condition_code.into(),
            prediction_threshold,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            default_risk: 0.15,
            dwell_mins: 3,
            transfer_mins: 5,
            condition_code: MECHANICAL_ISSUE.to_string(),
            prediction_threshold: 0.5,
        }
    }
}
