// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heat/cool program commands.
//!
//! Program URLs address a whole week (`/program/heat`) or one day
//! (`/program/heat/thu`). Day writes key their payload by the resolved
//! weekday index, not the abbreviation; week writes submit the mapping
//! as-is.

use serde_json::json;

use crate::command::Command;
use crate::types::{DaySchedule, ProgramKind, WeekProgram, Weekday};

/// Command to read or write a heat/cool program.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::command::{Command, ProgramCommand};
/// use radiotherm_lib::types::{DaySchedule, ProgramKind, Weekday};
///
/// let cmd = ProgramCommand::set_day(
///     ProgramKind::Cool,
///     Weekday::Thursday,
///     DaySchedule::from_csv("360,80,480,80"),
/// );
/// assert_eq!(cmd.path(), "/program/cool/thu");
/// assert_eq!(
///     cmd.payload().unwrap(),
///     serde_json::json!({"3": [360, 80, 480, 80]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramCommand {
    /// Read a program, for the whole week or a single day.
    Get {
        /// Heat or cool program.
        kind: ProgramKind,
        /// Restrict the read to one day, if set.
        day: Option<Weekday>,
    },
    /// Write one day's schedule, keyed by the weekday index.
    SetDay {
        /// Heat or cool program.
        kind: ProgramKind,
        /// The day being written.
        day: Weekday,
        /// The flat schedule for that day.
        schedule: DaySchedule,
    },
    /// Write a week mapping verbatim to the whole-week path.
    SetWeek {
        /// Heat or cool program.
        kind: ProgramKind,
        /// The week mapping, submitted unmodified.
        program: WeekProgram,
    },
}

impl ProgramCommand {
    /// Creates a whole-week program read.
    #[must_use]
    pub const fn get_week(kind: ProgramKind) -> Self {
        Self::Get { kind, day: None }
    }

    /// Creates a single-day program read.
    #[must_use]
    pub const fn get_day(kind: ProgramKind, day: Weekday) -> Self {
        Self::Get {
            kind,
            day: Some(day),
        }
    }

    /// Creates a single-day program write.
    #[must_use]
    pub const fn set_day(kind: ProgramKind, day: Weekday, schedule: DaySchedule) -> Self {
        Self::SetDay {
            kind,
            day,
            schedule,
        }
    }

    /// Creates a whole-week program write.
    #[must_use]
    pub const fn set_week(kind: ProgramKind, program: WeekProgram) -> Self {
        Self::SetWeek { kind, program }
    }

    const fn kind(&self) -> ProgramKind {
        match self {
            Self::Get { kind, .. } | Self::SetDay { kind, .. } | Self::SetWeek { kind, .. } => {
                *kind
            }
        }
    }
}

impl Command for ProgramCommand {
    fn path(&self) -> String {
        let base = format!("/program/{}", self.kind().path_segment());
        match self {
            Self::Get { day: Some(day), .. } | Self::SetDay { day, .. } => {
                format!("{base}/{day}")
            }
            Self::Get { day: None, .. } | Self::SetWeek { .. } => base,
        }
    }

    fn payload(&self) -> Option<serde_json::Value> {
        match self {
            Self::Get { .. } => None,
            Self::SetDay { day, schedule, .. } => Some(json!({
                (day.index().to_string()): serde_json::Value::from(schedule),
            })),
            Self::SetWeek { program, .. } => Some(serde_json::Value::from(program)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_week_path_has_no_day_segment() {
        let cmd = ProgramCommand::get_week(ProgramKind::Heat);
        assert_eq!(cmd.path(), "/program/heat");
        assert_eq!(cmd.payload(), None);
    }

    #[test]
    fn get_day_path_uses_abbreviation() {
        let cmd = ProgramCommand::get_day(ProgramKind::Cool, Weekday::Sunday);
        assert_eq!(cmd.path(), "/program/cool/sun");
        assert_eq!(cmd.payload(), None);
    }

    #[test]
    fn set_day_payload_keyed_by_index() {
        let cmd = ProgramCommand::set_day(
            ProgramKind::Cool,
            Weekday::Thursday,
            DaySchedule::from_csv("360,80,480,80"),
        );
        assert_eq!(cmd.path(), "/program/cool/thu");
        assert_eq!(cmd.payload().unwrap(), json!({"3": [360, 80, 480, 80]}));
    }

    #[test]
    fn set_day_keeps_non_digit_tokens_as_text() {
        let cmd = ProgramCommand::set_day(
            ProgramKind::Heat,
            Weekday::Monday,
            DaySchedule::from_csv("360, 70"),
        );
        assert_eq!(cmd.payload().unwrap(), json!({"0": [360, " 70"]}));
    }

    #[test]
    fn set_week_submits_mapping_verbatim() {
        let program = WeekProgram::new()
            .with_day(Weekday::Monday, DaySchedule::from(vec![360, 66, 1320, 58]))
            .with_day(Weekday::Tuesday, DaySchedule::from(vec![360, 70, 1320, 70]));
        let cmd = ProgramCommand::set_week(ProgramKind::Heat, program);

        assert_eq!(cmd.path(), "/program/heat");
        assert_eq!(
            cmd.payload().unwrap(),
            json!({
                "0": [360, 66, 1320, 58],
                "1": [360, 70, 1320, 70],
            })
        );
    }
}
