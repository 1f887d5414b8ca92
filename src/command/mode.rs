// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode, fan mode, hold and override commands.
//!
//! Each of these writes a single numeric field to the base endpoint.
//! The current values are read back through the full status query, not
//! through dedicated GETs.

use serde_json::json;

use crate::command::Command;
use crate::types::{FanMode, HoldState, OverrideState, ThermostatMode};

/// Command to set the operating mode (`tmode`).
///
/// # Examples
///
/// ```
/// use radiotherm_lib::command::{Command, ModeCommand};
/// use radiotherm_lib::types::ThermostatMode;
///
/// let cmd = ModeCommand::new(ThermostatMode::Cool);
/// assert_eq!(cmd.payload().unwrap(), serde_json::json!({"tmode": 2}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCommand(ThermostatMode);

impl ModeCommand {
    /// Creates an operating mode command.
    #[must_use]
    pub const fn new(mode: ThermostatMode) -> Self {
        Self(mode)
    }
}

impl Command for ModeCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        Some(json!({"tmode": self.0.as_num()}))
    }
}

/// Command to set the fan mode (`fmode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanModeCommand(FanMode);

impl FanModeCommand {
    /// Creates a fan mode command.
    #[must_use]
    pub const fn new(mode: FanMode) -> Self {
        Self(mode)
    }
}

impl Command for FanModeCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        Some(json!({"fmode": self.0.as_num()}))
    }
}

/// Command to set the schedule hold flag (`hold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldCommand(HoldState);

impl HoldCommand {
    /// Creates a hold command.
    #[must_use]
    pub const fn new(state: HoldState) -> Self {
        Self(state)
    }
}

impl Command for HoldCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        Some(json!({"hold": self.0.as_num()}))
    }
}

/// Command to set the override flag (`override`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideCommand(OverrideState);

impl OverrideCommand {
    /// Creates an override command.
    #[must_use]
    pub const fn new(state: OverrideState) -> Self {
        Self(state)
    }
}

impl Command for OverrideCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        Some(json!({"override": self.0.as_num()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_command_payload() {
        let cmd = ModeCommand::new(ThermostatMode::Auto);
        assert_eq!(cmd.payload().unwrap(), json!({"tmode": 3}));
        assert_eq!(cmd.path(), "");
    }

    #[test]
    fn fan_mode_command_payload() {
        let cmd = FanModeCommand::new(FanMode::On);
        assert_eq!(cmd.payload().unwrap(), json!({"fmode": 2}));
    }

    #[test]
    fn hold_command_payload() {
        assert_eq!(
            HoldCommand::new(HoldState::Enabled).payload().unwrap(),
            json!({"hold": 1})
        );
        assert_eq!(
            HoldCommand::new(HoldState::Disabled).payload().unwrap(),
            json!({"hold": 0})
        );
    }

    #[test]
    fn override_command_payload() {
        assert_eq!(
            OverrideCommand::new(OverrideState::Enabled)
                .payload()
                .unwrap(),
            json!({"override": 1})
        );
    }
}
