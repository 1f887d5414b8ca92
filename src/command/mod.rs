// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat command definitions.
//!
//! This module provides typed representations of the requests the
//! thermostat's embedded JSON API accepts, one per device capability.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Target |
//! |-------------|---------|--------|
//! | [`StatusCommand`] | Read full device state | base |
//! | [`ModelCommand`] | Read device model | `/model` |
//! | [`SetpointCommand`] | Set heating/cooling target | base |
//! | [`ModeCommand`] | Set operating mode (`tmode`) | base |
//! | [`FanModeCommand`] | Set fan mode (`fmode`) | base |
//! | [`HoldCommand`] | Set schedule hold flag | base |
//! | [`OverrideCommand`] | Set override flag | base |
//! | [`EnergyLedCommand`] | Set energy LED level | `/led` |
//! | [`ProgramCommand`] | Read/write heat/cool programs | `/program/...` |
//!
//! # Command Structure
//!
//! Each command contributes two things to a request:
//! - A path suffix appended to the thermostat resource (empty for most
//!   commands, a fixed segment like `/led` or `/program/cool/thu` for
//!   the rest).
//! - An optional JSON payload. Commands without a payload are sent as
//!   GET requests; commands with one are POSTed.
//!
//! # Examples
//!
//! ```
//! use radiotherm_lib::command::{Command, SetpointCommand};
//! use radiotherm_lib::types::Setpoint;
//!
//! let cmd = SetpointCommand::cool(Setpoint::new(72.0).unwrap());
//! assert_eq!(cmd.path(), "");
//! assert_eq!(
//!     cmd.payload().unwrap(),
//!     serde_json::json!({"tmode": 2, "t_cool": 72.0})
//! );
//! ```

mod led;
mod mode;
mod program;
mod setpoint;
mod status;

pub use led::EnergyLedCommand;
pub use mode::{FanModeCommand, HoldCommand, ModeCommand, OverrideCommand};
pub use program::ProgramCommand;
pub use setpoint::{SetpointCommand, SetpointField};
pub use status::{ModelCommand, StatusCommand};

/// A request that can be sent to the thermostat.
///
/// Commands describe the path suffix and JSON body of a single HTTP
/// round trip; the protocol layer turns them into GET or POST requests.
pub trait Command {
    /// Returns the path suffix relative to the thermostat resource.
    ///
    /// Empty for commands targeting the base endpoint; otherwise a
    /// fixed suffix such as `/model`, `/led` or `/program/heat/mon`.
    fn path(&self) -> String {
        String::new()
    }

    /// Returns the JSON request body, if any.
    ///
    /// Query commands return `None` and are issued as GET requests with
    /// no body.
    fn payload(&self) -> Option<serde_json::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThermostatMode;

    #[test]
    fn query_commands_have_no_payload() {
        assert_eq!(StatusCommand.payload(), None);
        assert_eq!(ModelCommand.payload(), None);
    }

    #[test]
    fn write_commands_target_base_by_default() {
        let cmd = ModeCommand::new(ThermostatMode::Heat);
        assert_eq!(cmd.path(), "");
        assert!(cmd.payload().is_some());
    }
}
