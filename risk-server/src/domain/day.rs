//! Day-of-week type.
//!
//! Delay risk is conditioned on the day of week, encoded as an integer
//! from 0 (Monday) to 6 (Sunday).

use std::fmt;

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

/// Error returned when a day index is outside `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid day of week {0}: must be 0 (Monday) to 6 (Sunday)")]
pub struct InvalidDayOfWeek(pub i64);

const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A validated day of week.
///
/// # Examples
///
/// ```
/// use risk_server::domain::DayOfWeek;
///
/// let monday = DayOfWeek::from_index(0).unwrap();
/// assert_eq!(monday.index(), 0);
/// assert!(monday.is_weekday());
///
/// assert!(DayOfWeek::from_index(7).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayOfWeek(Weekday);

impl DayOfWeek {
    /// Create from an index where 0 is Monday and 6 is Sunday.
    pub fn from_index(index: i64) -> Result<Self, InvalidDayOfWeek> {
        usize::try_from(index)
            .ok()
            .and_then(|i| DAYS.get(i))
            .map(|&day| DayOfWeek(day))
            .ok_or(InvalidDayOfWeek(index))
    }

    /// The current local day.
    pub fn today() -> Self {
        DayOfWeek(Local::now().weekday())
    }

    /// Index from 0 (Monday) to 6 (Sunday).
    pub fn index(&self) -> u8 {
        self.0.num_days_from_monday() as u8
    }

    /// Monday to Friday.
    pub fn is_weekday(&self) -> bool {
        self.index() < 5
    }

    /// The underlying chrono weekday.
    pub fn weekday(&self) -> Weekday {
        self.0
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        DayOfWeek(day)
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = InvalidDayOfWeek;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        DayOfWeek::from_index(index)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.index()
    }
}

impl fmt::Debug for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayOfWeek({})", self.0)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_roundtrip(i in 0i64..7) {
            prop_assert_eq!(DayOfWeek::from_index(i).unwrap().index() as i64, i);
        }

        #[test]
        fn out_of_range_rejected(i in prop_oneof![i64::MIN..0, 7i64..i64::MAX]) {
            prop_assert!(DayOfWeek::from_index(i).is_err());
        }
    }
}
