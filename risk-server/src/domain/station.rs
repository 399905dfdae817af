//! Station and line types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A short transit line code such as `YU`, `BD` or `SRT`.
///
/// Line codes are 1 to 8 uppercase ASCII letters or digits. Any `LineCode`
/// value is valid by construction.
///
/// # Examples
///
/// ```
/// use risk_server::domain::LineCode;
///
/// let yu = LineCode::parse("YU").unwrap();
/// assert_eq!(yu.as_str(), "YU");
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("yu").is_err());
///
/// // Empty is rejected
/// assert!(LineCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineCode(String);

impl LineCode {
    /// Maximum length of a line code.
    pub const MAX_LEN: usize = 8;

    /// Parse a line code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(InvalidLineCode {
                reason: "must be between 1 and 8 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidLineCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(LineCode(s.to_string()))
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for LineCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LineCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station in the network topology.
///
/// Station names are case-sensitive and conventionally uppercase
/// (e.g. `UNION STATION`). Each station belongs to exactly one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station name
    pub name: String,

    /// Line the station is listed under
    pub line: LineCode,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, line: LineCode, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            line,
            lat,
            lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_line_codes() {
        assert!(LineCode::parse("YU").is_ok());
        assert!(LineCode::parse("BD").is_ok());
        assert!(LineCode::parse("SRT").is_ok());
        assert!(LineCode::parse("L5").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(LineCode::parse("yu").is_err());
        assert!(LineCode::parse("Bd").is_err());
    }

    #[test]
    fn reject_bad_length() {
        assert!(LineCode::parse("").is_err());
        assert!(LineCode::parse("ABCDEFGHI").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(LineCode::parse("Y-U").is_err());
        assert!(LineCode::parse("Y U").is_err());
    }

    #[test]
    fn display_and_debug() {
        let line = LineCode::parse("SRT").unwrap();
        assert_eq!(format!("{}", line), "SRT");
        assert_eq!(format!("{:?}", line), "LineCode(SRT)");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<LineCode, _> = serde_json::from_str("\"YU\"");
        assert_eq!(ok.unwrap().as_str(), "YU");

        let bad: Result<LineCode, _> = serde_json::from_str("\"yu\"");
        assert!(bad.is_err());
    }

    #[test]
    fn station_serializes_flat() {
        let station = Station::new(
            "UNION STATION",
            LineCode::parse("YU").unwrap(),
            43.6452,
            -79.3806,
        );
        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json["name"], "UNION STATION");
        assert_eq!(json["line"], "YU");
        assert_eq!(json["lat"], 43.6452);
    }
}
