//! Time-of-day travel preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown time preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time preference {0:?}: expected rush_hour, off_peak or any")]
pub struct InvalidTimePreference(pub String);

/// When the rider intends to travel.
///
/// Each preference scales both the averaged delay risk and the estimated
/// travel time of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePreference {
    RushHour,
    OffPeak,
    #[default]
    Any,
}

impl TimePreference {
    /// Multiplier applied to the averaged route risk.
    pub fn risk_multiplier(&self) -> f64 {
        match self {
            TimePreference::RushHour => 1.5,
            TimePreference::OffPeak => 0.8,
            TimePreference::Any => 1.0,
        }
    }

    /// Multiplier applied to the estimated travel time.
    pub fn time_multiplier(&self) -> f64 {
        match self {
            TimePreference::RushHour => 1.3,
            TimePreference::OffPeak => 0.9,
            TimePreference::Any => 1.0,
        }
    }

    /// The wire name (`rush_hour`, `off_peak`, `any`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePreference::RushHour => "rush_hour",
            TimePreference::OffPeak => "off_peak",
            TimePreference::Any => "any",
        }
    }
}

impl FromStr for TimePreference {
    type Err = InvalidTimePreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rush_hour" => Ok(TimePreference::RushHour),
            "off_peak" => Ok(TimePreference::OffPeak),
            "any" => Ok(TimePreference::Any),
            other => Err(InvalidTimePreference(other.to_string())),
        }
    }
}

impl fmt::Display for TimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
