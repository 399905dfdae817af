//! Categorical delay model.
//!
//! An additive model over the categorical inputs: a base probability plus
//! per-station and per-code adjustments, plus a weekday adjustment, clamped
//! to `[0, 1]`. Each categorical field has a fixed vocabulary; values
//! outside it are rejected as unrecognized, as a label encoder would.
//!
//! Parameters are plain JSON so a retrained model can be swapped in:
//!
//! ```json
//! {
//!   "base_probability": 0.1,
//!   "weekday_adjustment": 0.05,
//!   "lines": ["YU", "BD"],
//!   "stations": { "UNION STATION": 0.1, "KIPLING": 0.0 },
//!   "codes": { "MUIS": 0.15, "PAS": 0.0 }
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Category, RiskScorer, ScoreError};
use crate::domain::DayOfWeek;

/// Errors loading model parameters.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Reading the parameter file failed
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parameter JSON was malformed
    #[error("failed to parse model parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameters parsed but are unusable
    #[error("invalid model parameters: {0}")]
    Invalid(String),
}

/// Serializable parameters of a [`CategoricalScorer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Probability before any adjustment.
    pub base_probability: f64,

    /// Added on Monday to Friday.
    #[serde(default)]
    pub weekday_adjustment: f64,

    /// Known line codes.
    pub lines: Vec<String>,

    /// Known stations and their adjustment.
    pub stations: BTreeMap<String, f64>,

    /// Known condition codes and their adjustment.
    pub codes: BTreeMap<String, f64>,
}

impl Default for ModelParams {
    fn default() -> Self {
        let busy = ["UNION STATION", "BLOOR-YONGE", "ST GEORGE"];
        let stations = [
            "UNION STATION",
            "BLOOR-YONGE",
            "ST GEORGE",
            "SPADINA",
            "BAY",
            "SHEPPARD-YONGE",
            "FINCH",
            "DOWNSVIEW",
            "KIPLING",
            "KENNEDY",
            "DON MILLS",
            "SCARBOROUGH CENTRE",
        ]
        .into_iter()
        .map(|s| (s.to_string(), if busy.contains(&s) { 0.10 } else { 0.0 }))
        .collect();

        // Mechanical, signal and track problems cause the longest delays
        let severe = ["MUIS", "SIG", "TRA"];
        let codes = ["MUIS", "SEC", "SIG", "PAS", "TRA", "OPE", "MED", "INV"]
            .into_iter()
            .map(|c| (c.to_string(), if severe.contains(&c) { 0.15 } else { 0.0 }))
            .collect();

        Self {
            base_probability: 0.10,
            weekday_adjustment: 0.05,
            lines: vec!["YU".into(), "BD".into(), "SRT".into()],
            stations,
            codes,
        }
    }
}

impl ModelParams {
    fn validate(&self) -> Result<(), ModelError> {
        if !(0.0..=1.0).contains(&self.base_probability) {
            return Err(ModelError::Invalid(format!(
                "base_probability {} is outside [0, 1]",
                self.base_probability
            )));
        }
        if !self.weekday_adjustment.is_finite() {
            return Err(ModelError::Invalid(
                "weekday_adjustment must be finite".to_string(),
            ));
        }
        if let Some((name, _)) = self
            .stations
            .iter()
            .chain(self.codes.iter())
            .find(|(_, adj)| !adj.is_finite())
        {
            return Err(ModelError::Invalid(format!(
                "adjustment for {name:?} must be finite"
            )));
        }
        if self.lines.is_empty() || self.stations.is_empty() || self.codes.is_empty() {
            return Err(ModelError::Invalid(
                "lines, stations and codes must each be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Additive categorical delay model.
#[derive(Debug, Clone)]
pub struct CategoricalScorer {
    base_probability: f64,
    weekday_adjustment: f64,
    lines: HashSet<String>,
    stations: HashMap<String, f64>,
    codes: HashMap<String, f64>,
}

impl CategoricalScorer {
    /// Build a scorer from validated parameters.
    pub fn new(params: ModelParams) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self::from_validated(params))
    }

    fn from_validated(params: ModelParams) -> Self {
        Self {
            base_probability: params.base_probability,
            weekday_adjustment: params.weekday_adjustment,
            lines: params.lines.into_iter().collect(),
            stations: params.stations.into_iter().collect(),
            codes: params.codes.into_iter().collect(),
        }
    }

    /// Parse parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let params: ModelParams = serde_json::from_str(json)?;
        Self::new(params)
    }

    /// Load parameters from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scorer = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            stations = scorer.stations.len(),
            codes = scorer.codes.len(),
            "loaded model parameters"
        );
        Ok(scorer)
    }
}

impl Default for CategoricalScorer {
    fn default() -> Self {
        Self::from_validated(ModelParams::default())
    }
}

impl RiskScorer for CategoricalScorer {
    fn score(
        &self,
        line: &str,
        station: &str,
        code: &str,
        day: DayOfWeek,
    ) -> Result<f64, ScoreError> {
        if !self.lines.contains(line) {
            return Err(ScoreError::unrecognized(Category::Line, line));
        }
        let station_adj = self
            .stations
            .get(station)
            .ok_or_else(|| ScoreError::unrecognized(Category::Station, station))?;
        let code_adj = self
            .codes
            .get(code)
            .ok_or_else(|| ScoreError::unrecognized(Category::Code, code))?;

        let day_adj = if day.is_weekday() {
            self.weekday_adjustment
        } else {
            0.0
        };

        Ok((self.base_probability + station_adj + code_adj + day_adj).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn day(i: i64) -> DayOfWeek {
        DayOfWeek::from_index(i).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn busy_station_severe_code_on_weekday() {
        let scorer = CategoricalScorer::default();
        let p = scorer.score("YU", "UNION STATION", "MUIS", day(0)).unwrap();
        assert_close(p, 0.40);
    }

    #[test]
    fn quiet_station_minor_code_on_weekend() {
        let scorer = CategoricalScorer::default();
        let p = scorer.score("YU", "FINCH", "PAS", day(6)).unwrap();
        assert_close(p, 0.10);
    }

    #[test]
    fn weekday_adjustment_applies_monday_to_friday() {
        let scorer = CategoricalScorer::default();
        let fri = scorer.score("BD", "KIPLING", "SEC", day(4)).unwrap();
        let sat = scorer.score("BD", "KIPLING", "SEC", day(5)).unwrap();
        assert_close(fri - sat, 0.05);
    }

    #[test]
    fn unknown_inputs_are_reported_per_field() {
        let scorer = CategoricalScorer::default();

        assert_eq!(
            scorer.score("XX", "FINCH", "MUIS", day(0)),
            Err(ScoreError::unrecognized(Category::Line, "XX"))
        );
        assert_eq!(
            scorer.score("YU", "NOWHERE", "MUIS", day(0)),
            Err(ScoreError::unrecognized(Category::Station, "NOWHERE"))
        );
        assert_eq!(
            scorer.score("YU", "FINCH", "ZZZ", day(0)),
            Err(ScoreError::unrecognized(Category::Code, "ZZZ"))
        );
    }

    #[test]
    fn probability_is_clamped() {
        let params = ModelParams {
            base_probability: 0.9,
            weekday_adjustment: 0.5,
            lines: vec!["YU".into()],
            stations: [("A".to_string(), 0.5), ("B".to_string(), -2.0)].into(),
            codes: [("X".to_string(), 0.0)].into(),
        };
        let scorer = CategoricalScorer::new(params).unwrap();

        assert_eq!(scorer.score("YU", "A", "X", day(0)), Ok(1.0));
        assert_eq!(scorer.score("YU", "B", "X", day(0)), Ok(0.0));
    }

    #[test]
    fn default_scorer_matches_default_params() {
        let from_params = CategoricalScorer::new(ModelParams::default()).unwrap();
        let default = CategoricalScorer::default();
        for (station, code, d) in [("BAY", "SIG", 1), ("KENNEDY", "MED", 5)] {
            assert_eq!(
                from_params.score("BD", station, code, day(d)),
                default.score("BD", station, code, day(d))
            );
        }
    }

    #[test]
    fn rejects_invalid_params() {
        let params = ModelParams {
            base_probability: 1.5,
            ..ModelParams::default()
        };
        assert!(matches!(
            CategoricalScorer::new(params),
            Err(ModelError::Invalid(_))
        ));

        let params = ModelParams {
            codes: BTreeMap::new(),
            ..ModelParams::default()
        };
        assert!(matches!(
            CategoricalScorer::new(params),
            Err(ModelError::Invalid(_))
        ));

        let mut params = ModelParams::default();
        params.stations.insert("NAN".into(), f64::NAN);
        assert!(matches!(
            CategoricalScorer::new(params),
            Err(ModelError::Invalid(_))
        ));
    }

    #[test]
    fn from_json_defaults_weekday_adjustment() {
        let json = r#"{
            "base_probability": 0.2,
            "lines": ["YU"],
            "stations": {"FINCH": 0.0},
            "codes": {"MUIS": 0.1}
        }"#;
        let scorer = CategoricalScorer::from_json(json).unwrap();
        let p = scorer.score("YU", "FINCH", "MUIS", day(0)).unwrap();
        assert_close(p, 0.3);
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(
            CategoricalScorer::from_json("{not json"),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn from_path_roundtrips_params() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&ModelParams::default()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let scorer = CategoricalScorer::from_path(file.path()).unwrap();
        let p = scorer.score("YU", "ST GEORGE", "TRA", day(2)).unwrap();
        assert_close(p, 0.40);
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CategoricalScorer::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
