//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{DayOfWeek, InvalidDayOfWeek, InvalidTimePreference, TimePreference};
use crate::planner::{OptimizeError, RouteEvaluator, RouteOptimizer, RouteRequest};
use crate::scorer::{ScoreError, evaluate_delay_risk};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/route/optimize", post(optimize_route))
        .route("/stations", get(list_stations))
        .route("/stations/predictions", get(station_predictions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Predict whether a major delay will occur.
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let day = DayOfWeek::from_index(req.day_of_week)?;

    let result = evaluate_delay_risk(
        state.scorer.as_ref(),
        &req.line,
        &req.station,
        &req.code,
        day,
        state.config.prediction_threshold,
    )?;

    info!(
        line = %req.line,
        station = %req.station,
        code = %req.code,
        probability = result.probability,
        "predicted delay"
    );

    Ok(Json(PredictResponse {
        prediction: result.prediction,
        probability: result.probability,
        input: req,
    }))
}

/// Rank routes between two stations by delay risk.
async fn optimize_route(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRouteRequest>,
) -> Result<Json<OptimizeRouteResponse>, AppError> {
    let day = DayOfWeek::from_index(req.day_of_week)?;
    let preference: TimePreference = req.time_preference.parse()?;

    let optimizer = RouteOptimizer::new(
        &state.topology,
        &state.transfers,
        state.scorer.as_ref(),
        &state.config,
    );
    let request = RouteRequest::new(req.start_station, req.end_station, day, preference);
    let routes = optimizer.optimize(&request)?;

    Ok(Json(OptimizeRouteResponse {
        routes: routes.iter().map(RouteResult::from_route).collect(),
    }))
}

/// List all stations in the network.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .topology
        .iter()
        .map(StationResult::from_station)
        .collect();

    Json(StationsResponse { stations })
}

/// Delay probability for every station, using the default condition code.
async fn station_predictions(
    State(state): State<AppState>,
    Query(query): Query<StationPredictionsQuery>,
) -> Result<Json<Vec<StationPrediction>>, AppError> {
    let day = match query.day_of_week {
        Some(index) => DayOfWeek::from_index(index)?,
        None => DayOfWeek::today(),
    };

    let evaluator = RouteEvaluator::new(&state.topology, state.scorer.as_ref(), &state.config);
    let predictions = evaluator
        .station_risks(day)
        .iter()
        .map(StationPrediction::from_risk)
        .collect();

    Ok(Json(predictions))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<InvalidDayOfWeek> for AppError {
    fn from(e: InvalidDayOfWeek) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidTimePreference> for AppError {
    fn from(e: InvalidTimePreference) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<OptimizeError> for AppError {
    fn from(e: OptimizeError) -> Self {
        match e {
            OptimizeError::InvalidStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            OptimizeError::Evaluate(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<ScoreError> for AppError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::UnrecognizedCategory { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            ScoreError::Unavailable(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
