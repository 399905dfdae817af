//! Delay risk scoring.
//!
//! A [`RiskScorer`] estimates the probability that a major delay occurs for
//! a (line, station, condition code, day of week) tuple. The planner only
//! depends on this trait, so any model can stand behind it; tests use stubs.

mod model;
#[cfg(test)]
pub(crate) mod stub;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::DayOfWeek;

pub use model::{CategoricalScorer, ModelError, ModelParams};

/// Which categorical input a scorer failed to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Line,
    Station,
    Code,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Line => "line",
            Category::Station => "station",
            Category::Code => "code",
        })
    }
}

/// Error from a risk scorer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    /// An input value was never seen by the model.
    #[error("unrecognized {field}: {value:?}")]
    UnrecognizedCategory { field: Category, value: String },

    /// The scorer could not produce a probability.
    #[error("scorer unavailable: {0}")]
    Unavailable(String),
}

impl ScoreError {
    /// Shorthand for an unrecognized category.
    pub fn unrecognized(field: Category, value: &str) -> Self {
        ScoreError::UnrecognizedCategory {
            field,
            value: value.to_string(),
        }
    }
}

/// Estimates the probability of a major delay.
///
/// Implementations must be safe to call concurrently and must not mutate
/// shared state while scoring.
pub trait RiskScorer: Send + Sync {
    /// Probability in `[0, 1]` that a major delay occurs.
    fn score(
        &self,
        line: &str,
        station: &str,
        code: &str,
        day: DayOfWeek,
    ) -> Result<f64, ScoreError>;
}

impl<S: RiskScorer + ?Sized> RiskScorer for Arc<S> {
    fn score(
        &self,
        line: &str,
        station: &str,
        code: &str,
        day: DayOfWeek,
    ) -> Result<f64, ScoreError> {
        (**self).score(line, station, code, day)
    }
}

/// A binary delay prediction with its probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayPrediction {
    /// 1 if a major delay is predicted, else 0
    pub prediction: u8,

    /// Probability of a major delay
    pub probability: f64,
}

impl DelayPrediction {
    /// Classify a probability against a threshold (inclusive).
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        Self {
            prediction: u8::from(probability >= threshold),
            probability,
        }
    }
}

/// Predict whether a major delay will occur.
///
/// Unlike route evaluation there is no fallback here: an unrecognized
/// input is returned to the caller.
pub fn evaluate_delay_risk<S: RiskScorer + ?Sized>(
    scorer: &S,
    line: &str,
    station: &str,
    code: &str,
    day: DayOfWeek,
    threshold: f64,
) -> Result<DelayPrediction, ScoreError> {
    let probability = scorer.score(line, station, code, day)?;
    Ok(DelayPrediction::from_probability(probability, threshold))
}
