// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heat/cool program schedule types.
//!
//! A program is a per-weekday sequence of `[minute_of_day, temperature]`
//! pairs, flattened into a single array per day. On the wire, week
//! programs are JSON objects keyed by stringified weekday indices
//! (`"0"`-`"6"`, Monday = 0).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Weekday;

/// Which of the two device programs a schedule operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// The heating program.
    Heat,
    /// The cooling program.
    Cool,
}

impl ProgramKind {
    /// Returns the URL path segment for this program.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Cool => "cool",
        }
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// A single schedule token: an integer where the source text consists
/// only of digits, otherwise the text itself.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::ScheduleValue;
///
/// assert_eq!(ScheduleValue::from_token("360"), ScheduleValue::Number(360));
/// assert_eq!(
///     ScheduleValue::from_token(" 80"),
///     ScheduleValue::Text(" 80".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleValue {
    /// An all-digit token, converted to an integer.
    Number(i64),
    /// Any other token, passed through as text.
    Text(String),
}

impl ScheduleValue {
    /// Converts one comma-separated token into a schedule value.
    ///
    /// A token made up entirely of ASCII digits becomes a number; any
    /// other token (including empty or whitespace-padded ones) stays
    /// text, exactly as the device write path expects.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = token.parse::<i64>() {
                return Self::Number(n);
            }
        }
        Self::Text(token.to_string())
    }
}

impl From<i64> for ScheduleValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScheduleValue {
    fn from(value: &str) -> Self {
        Self::from_token(value)
    }
}

/// One weekday's flat schedule: alternating minute-of-day and
/// temperature values.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::DaySchedule;
///
/// // From comma-separated text (all-digit tokens become integers)
/// let sched = DaySchedule::from_csv("360,80,480,80");
/// assert_eq!(serde_json::to_string(&sched).unwrap(), "[360,80,480,80]");
///
/// // From minute/temperature pairs
/// let sched = DaySchedule::from_pairs([(360, 70), (1320, 66)]);
/// assert_eq!(serde_json::to_string(&sched).unwrap(), "[360,70,1320,66]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule(Vec<ScheduleValue>);

impl DaySchedule {
    /// Creates a schedule from pre-built values.
    #[must_use]
    pub fn new(values: Vec<ScheduleValue>) -> Self {
        Self(values)
    }

    /// Parses a comma-separated schedule string.
    ///
    /// Each token is converted to an integer when it consists only of
    /// digits, otherwise left as text. Tokens are not trimmed.
    #[must_use]
    pub fn from_csv(text: &str) -> Self {
        Self(text.split(',').map(ScheduleValue::from_token).collect())
    }

    /// Creates a schedule from `(minute_of_day, temperature)` pairs,
    /// flattened in order.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self(
            pairs
                .into_iter()
                .flat_map(|(minute, temp)| [ScheduleValue::Number(minute), ScheduleValue::Number(temp)])
                .collect(),
        )
    }

    /// Returns the schedule values in wire order.
    #[must_use]
    pub fn values(&self) -> &[ScheduleValue] {
        &self.0
    }

    /// Returns `true` if the schedule has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of values (twice the number of transitions).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<i64>> for DaySchedule {
    fn from(values: Vec<i64>) -> Self {
        Self(values.into_iter().map(ScheduleValue::Number).collect())
    }
}

/// A full-week program: weekday index mapped to that day's flat
/// schedule.
///
/// Serializes to the wire format the device expects, with string keys
/// `"0"`-`"6"` (Monday = 0). Days are submitted exactly as stored; the
/// device accepts partial weeks.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::{DaySchedule, Weekday, WeekProgram};
///
/// let program = WeekProgram::new()
///     .with_day(Weekday::Monday, DaySchedule::from_pairs([(360, 70), (1320, 66)]));
///
/// let json = serde_json::to_string(&program).unwrap();
/// assert_eq!(json, r#"{"0":[360,70,1320,66]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekProgram(BTreeMap<Weekday, DaySchedule>);

impl WeekProgram {
    /// Creates an empty week program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schedule for one day, replacing any existing entry.
    pub fn set(&mut self, day: Weekday, schedule: DaySchedule) {
        self.0.insert(day, schedule);
    }

    /// Builder-style variant of [`WeekProgram::set`].
    #[must_use]
    pub fn with_day(mut self, day: Weekday, schedule: DaySchedule) -> Self {
        self.set(day, schedule);
        self
    }

    /// Returns the schedule for one day, if present.
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.0.get(&day)
    }

    /// Returns `true` if no days are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of days with a schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the days in device order (Monday first).
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        self.0.iter().map(|(day, sched)| (*day, sched))
    }
}

impl FromIterator<(Weekday, DaySchedule)> for WeekProgram {
    fn from_iter<T: IntoIterator<Item = (Weekday, DaySchedule)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&ScheduleValue> for serde_json::Value {
    fn from(value: &ScheduleValue) -> Self {
        match value {
            ScheduleValue::Number(n) => Self::from(*n),
            ScheduleValue::Text(s) => Self::from(s.clone()),
        }
    }
}

impl From<&DaySchedule> for serde_json::Value {
    fn from(schedule: &DaySchedule) -> Self {
        Self::Array(schedule.0.iter().map(Self::from).collect())
    }
}

impl From<&WeekProgram> for serde_json::Value {
    fn from(program: &WeekProgram) -> Self {
        let map = program
            .0
            .iter()
            .map(|(day, schedule)| (day.index().to_string(), Self::from(schedule)))
            .collect();
        Self::Object(map)
    }
}

impl Serialize for WeekProgram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, schedule) in &self.0 {
            map.serialize_entry(&day.index().to_string(), schedule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeekProgram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, DaySchedule> = BTreeMap::deserialize(deserializer)?;
        let mut days = BTreeMap::new();
        for (key, schedule) in raw {
            let index: u8 = key
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid weekday key: {key}")))?;
            let day = Weekday::from_index(index).map_err(D::Error::custom)?;
            days.insert(day, schedule);
        }
        Ok(Self(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_value_digit_tokens() {
        assert_eq!(ScheduleValue::from_token("360"), ScheduleValue::Number(360));
        assert_eq!(ScheduleValue::from_token("0"), ScheduleValue::Number(0));
    }

    #[test]
    fn schedule_value_non_digit_tokens() {
        assert_eq!(
            ScheduleValue::from_token("-5"),
            ScheduleValue::Text("-5".to_string())
        );
        assert_eq!(
            ScheduleValue::from_token(" 80"),
            ScheduleValue::Text(" 80".to_string())
        );
        assert_eq!(
            ScheduleValue::from_token(""),
            ScheduleValue::Text(String::new())
        );
    }

    #[test]
    fn day_schedule_from_csv_all_digits() {
        let sched = DaySchedule::from_csv("360,80,480,80");
        assert_eq!(
            sched.values(),
            &[
                ScheduleValue::Number(360),
                ScheduleValue::Number(80),
                ScheduleValue::Number(480),
                ScheduleValue::Number(80),
            ]
        );
    }

    #[test]
    fn day_schedule_from_csv_mixed_tokens() {
        // Tokens with spaces stay text, matching the device write path
        let sched = DaySchedule::from_csv("1320 , 80");
        assert_eq!(
            sched.values(),
            &[
                ScheduleValue::Text("1320 ".to_string()),
                ScheduleValue::Text(" 80".to_string()),
            ]
        );
    }

    #[test]
    fn day_schedule_serializes_flat() {
        let sched = DaySchedule::from(vec![360, 70, 480, 70]);
        assert_eq!(serde_json::to_string(&sched).unwrap(), "[360,70,480,70]");
    }

    #[test]
    fn week_program_serializes_with_index_keys() {
        let program = WeekProgram::new()
            .with_day(Weekday::Monday, DaySchedule::from(vec![360, 66]))
            .with_day(Weekday::Thursday, DaySchedule::from(vec![360, 70]));

        let json = serde_json::to_value(&program).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"0": [360, 66], "3": [360, 70]})
        );
    }

    #[test]
    fn week_program_deserializes_from_index_keys() {
        let json = r#"{"0":[360,70,480,70],"6":[420,66]}"#;
        let program: WeekProgram = serde_json::from_str(json).unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(
            program.day(Weekday::Monday).unwrap(),
            &DaySchedule::from(vec![360, 70, 480, 70])
        );
        assert_eq!(
            program.day(Weekday::Sunday).unwrap(),
            &DaySchedule::from(vec![420, 66])
        );
    }

    #[test]
    fn week_program_rejects_bad_keys() {
        assert!(serde_json::from_str::<WeekProgram>(r#"{"7":[1]}"#).is_err());
        assert!(serde_json::from_str::<WeekProgram>(r#"{"mon":[1]}"#).is_err());
    }

    #[test]
    fn week_program_iterates_monday_first() {
        let program = WeekProgram::new()
            .with_day(Weekday::Sunday, DaySchedule::from(vec![1]))
            .with_day(Weekday::Monday, DaySchedule::from(vec![2]));
        let days: Vec<Weekday> = program.iter().map(|(day, _)| day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Sunday]);
    }
}
