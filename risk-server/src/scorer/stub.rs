//! Stub scorer for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Category, RiskScorer, ScoreError};
use crate::domain::DayOfWeek;

/// Scorer that returns fixed probabilities per station.
///
/// Unlisted stations are reported as unrecognized. Every call is recorded.
#[derive(Debug, Default)]
pub struct StubScorer {
    probabilities: HashMap<String, f64>,
    calls: Mutex<Vec<(String, String, String, u8)>>,
}

impl StubScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, station: &str, probability: f64) -> Self {
        self.probabilities.insert(station.to_string(), probability);
        self
    }

    /// Recorded calls as (line, station, code, day index).
    pub fn calls(&self) -> Vec<(String, String, String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RiskScorer for StubScorer {
    fn score(
        &self,
        line: &str,
        station: &str,
        code: &str,
        day: DayOfWeek,
    ) -> Result<f64, ScoreError> {
        self.calls.lock().unwrap().push((
            line.to_string(),
            station.to_string(),
            code.to_string(),
            day.index(),
        ));
        self.probabilities
            .get(station)
            .copied()
            .ok_or_else(|| ScoreError::unrecognized(Category::Station, station))
    }
}
