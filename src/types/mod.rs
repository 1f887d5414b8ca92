// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat control.
//!
//! This module provides type-safe representations of values used in
//! thermostat commands. Each type ensures values are within their valid
//! ranges at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Weekday`] - Device weekday (`mon`..`sun`, Monday = index 0)
//! - [`ThermostatMode`] - Operating mode (`tmode`: off/heat/cool/auto)
//! - [`FanMode`] - Fan mode (`fmode`: auto/circulate/on)
//! - [`HoldState`] / [`OverrideState`] - Schedule hold and override flags
//! - [`EnergyLed`] - Energy LED level (0, 1, 2 or 4)
//! - [`Setpoint`] - Target temperature in °F (35.0-95.0)
//! - [`DaySchedule`] / [`WeekProgram`] - Heat/cool program schedules

mod led;
mod mode;
mod schedule;
mod setpoint;
mod weekday;

pub use led::EnergyLed;
pub use mode::{FanMode, HoldState, OverrideState, ThermostatMode};
pub use schedule::{DaySchedule, ProgramKind, ScheduleValue, WeekProgram};
pub use setpoint::Setpoint;
pub use weekday::Weekday;
