// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekday type for program schedules.
//!
//! The thermostat indexes weekdays 0-6 starting from Monday, and its
//! program URLs address single days by a three-letter abbreviation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A device weekday, Monday = 0 through Sunday = 6.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::Weekday;
///
/// let thu: Weekday = "thu".parse().unwrap();
/// assert_eq!(thu.index(), 3);
/// assert_eq!(thu.as_str(), "thu");
///
/// // Unknown abbreviations fail
/// assert!("foo".parse::<Weekday>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Monday (index 0).
    Monday,
    /// Tuesday (index 1).
    Tuesday,
    /// Wednesday (index 2).
    Wednesday,
    /// Thursday (index 3).
    Thursday,
    /// Friday (index 4).
    Friday,
    /// Saturday (index 5).
    Saturday,
    /// Sunday (index 6).
    Sunday,
}

impl Weekday {
    /// All weekdays in device order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the device-internal weekday index (Monday = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Creates a weekday from a device index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::WeekdayIndexOutOfRange` if the index exceeds 6.
    pub const fn from_index(index: u8) -> Result<Self, ValueError> {
        match index {
            0 => Ok(Self::Monday),
            1 => Ok(Self::Tuesday),
            2 => Ok(Self::Wednesday),
            3 => Ok(Self::Thursday),
            4 => Ok(Self::Friday),
            5 => Ok(Self::Saturday),
            6 => Ok(Self::Sunday),
            _ => Err(ValueError::WeekdayIndexOutOfRange(index)),
        }
    }

    /// Returns the three-letter abbreviation used in program URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "mon",
            Self::Tuesday => "tue",
            Self::Wednesday => "wed",
            Self::Thursday => "thu",
            Self::Friday => "fri",
            Self::Saturday => "sat",
            Self::Sunday => "sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mon" => Ok(Self::Monday),
            "tue" => Ok(Self::Tuesday),
            "wed" => Ok(Self::Wednesday),
            "thu" => Ok(Self::Thursday),
            "fri" => Ok(Self::Friday),
            "sat" => Ok(Self::Saturday),
            "sun" => Ok(Self::Sunday),
            _ => Err(ValueError::UnknownWeekday(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ValueError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_indices_monday_first() {
        let expected = [
            ("mon", 0),
            ("tue", 1),
            ("wed", 2),
            ("thu", 3),
            ("fri", 4),
            ("sat", 5),
            ("sun", 6),
        ];
        for (abbrev, index) in expected {
            let day: Weekday = abbrev.parse().unwrap();
            assert_eq!(day.index(), index);
            assert_eq!(day.as_str(), abbrev);
        }
    }

    #[test]
    fn weekday_from_str_case_insensitive() {
        assert_eq!("THU".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert_eq!("Mon".parse::<Weekday>().unwrap(), Weekday::Monday);
    }

    #[test]
    fn weekday_from_str_unknown() {
        let result = "thursday".parse::<Weekday>();
        assert!(matches!(result, Err(ValueError::UnknownWeekday(_))));
        assert!("".parse::<Weekday>().is_err());
        assert!("xyz".parse::<Weekday>().is_err());
    }

    #[test]
    fn weekday_from_index_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()).unwrap(), day);
        }
    }

    #[test]
    fn weekday_from_index_out_of_range() {
        assert!(matches!(
            Weekday::from_index(7),
            Err(ValueError::WeekdayIndexOutOfRange(7))
        ));
    }

    #[test]
    fn weekday_display() {
        assert_eq!(Weekday::Thursday.to_string(), "thu");
    }
}
