// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A Rust library to control RadioThermostat CT50-class Wi-Fi
//! thermostats via their embedded HTTP/JSON API.
//!
//! Each operation is a single stateless HTTP round trip against the
//! device's `/tstat` resource: a GET for reads, a POST with a JSON body
//! for writes.
//!
//! # Supported Features
//!
//! - **Status**: Full device state, model string
//! - **Setpoints**: Heating and cooling targets (35.0-95.0 °F)
//! - **Modes**: Operating mode, fan mode, hold and override flags
//! - **Energy LED**: Front-panel LED level (off/green/yellow/red)
//! - **Programs**: Weekly heat/cool schedules, whole-week or per-day
//!
//! # Quick Start
//!
//! ```no_run
//! use radiotherm_lib::Thermostat;
//! use radiotherm_lib::types::{Setpoint, ThermostatMode};
//!
//! #[tokio::main]
//! async fn main() -> radiotherm_lib::Result<()> {
//!     let tstat = Thermostat::http("192.168.1.120")?;
//!
//!     // Read current state
//!     let status = tstat.status().await?;
//!     println!("temperature: {} °F", status.temp);
//!
//!     // Cool to 72 °F
//!     tstat.set_cool_setpoint(Setpoint::new(72.0)?).await?;
//!
//!     // Back to heating
//!     tstat.set_mode(ThermostatMode::Heat).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Program Schedules
//!
//! Programs map weekdays (Monday = index 0) to flat sequences of
//! `[minute_of_day, temperature]` pairs:
//!
//! ```no_run
//! use radiotherm_lib::Thermostat;
//! use radiotherm_lib::types::{DaySchedule, Weekday, WeekProgram};
//!
//! # async fn example() -> radiotherm_lib::Result<()> {
//! let tstat = Thermostat::http("192.168.1.120")?;
//!
//! // One day from comma-separated text
//! tstat
//!     .set_cool_program_day(Weekday::Thursday, DaySchedule::from_csv("360,80,480,80"))
//!     .await?;
//!
//! // A whole week, submitted as-is
//! let program = WeekProgram::new()
//!     .with_day(Weekday::Monday, DaySchedule::from_pairs([(360, 70), (1320, 66)]));
//! tstat.set_heat_program_week(program).await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{
    Command, EnergyLedCommand, FanModeCommand, HoldCommand, ModeCommand, ModelCommand,
    OverrideCommand, ProgramCommand, SetpointCommand, SetpointField, StatusCommand,
};
pub use device::Thermostat;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{CommandResponse, HttpClient, HttpConfig, Protocol};
pub use response::{DeviceTime, ModelInfo, ThermostatStatus};
pub use types::{
    DaySchedule, EnergyLed, FanMode, HoldState, OverrideState, ProgramKind, ScheduleValue,
    Setpoint, ThermostatMode, WeekProgram, Weekday,
};
