//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::{ScoredRoute, StationRisk};

/// Request to predict a major delay.
///
/// Field names follow the model's feature names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictRequest {
    /// Line code (e.g., "YU")
    pub line: String,

    /// Station name (e.g., "UNION STATION")
    pub station: String,

    /// Delay condition code (e.g., "MUIS")
    pub code: String,

    /// 0 = Monday ... 6 = Sunday
    pub day_of_week: i64,
}

/// Response for a delay prediction.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// 0 = no major delay, 1 = major delay
    pub prediction: u8,

    /// Probability of a major delay
    pub probability: f64,

    /// The request, echoed back
    pub input: PredictRequest,
}

fn default_time_preference() -> String {
    "any".to_string()
}

/// Request to rank routes between two stations.
#[derive(Debug, Deserialize)]
pub struct OptimizeRouteRequest {
    /// Starting station name
    pub start_station: String,

    /// Destination station name
    pub end_station: String,

    /// 0 = Monday ... 6 = Sunday
    pub day_of_week: i64,

    /// "rush_hour", "off_peak" or "any"
    #[serde(default = "default_time_preference")]
    pub time_preference: String,
}

/// A scored route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Stations in travel order
    pub stations: Vec<String>,

    /// Relative risk score (may exceed 1.0 at rush hour)
    pub total_delay_risk: f64,

    /// Estimated travel time in minutes
    pub estimated_time: u32,
}

/// Response for route optimisation.
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    /// Routes, lowest risk first
    pub routes: Vec<RouteResult>,
}

/// A station in the network.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lng: f64,
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Query for per-station predictions.
#[derive(Debug, Default, Deserialize)]
pub struct StationPredictionsQuery {
    /// Defaults to today
    pub day_of_week: Option<i64>,
}

/// A station with its delay probability.
#[derive(Debug, Serialize)]
pub struct StationPrediction {
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lng: f64,
    pub delay_probability: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a scored route.
    pub fn from_route(route: &ScoredRoute) -> Self {
        Self {
            stations: route.stations.clone(),
            total_delay_risk: route.total_delay_risk,
            estimated_time: route.estimated_time_mins,
        }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            line: station.line.to_string(),
            lat: station.lat,
            lng: station.lng,
        }
    }
}

impl StationPrediction {
    /// Create from a station risk.
    pub fn from_risk(risk: &StationRisk<'_>) -> Self {
        Self {
            name: risk.station.name.clone(),
            line: risk.station.line.to_string(),
            lat: risk.station.lat,
            lng: risk.station.lng,
            delay_probability: risk.probability,
        }
    }
}
