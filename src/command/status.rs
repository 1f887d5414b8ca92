// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status and model query commands.

use crate::command::Command;

/// Command to read the thermostat's full state.
///
/// Targets the base endpoint with no body; the device replies with its
/// current temperature, modes, flags and setpoints.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::command::{Command, StatusCommand};
///
/// assert_eq!(StatusCommand.path(), "");
/// assert_eq!(StatusCommand.payload(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Command to read the device model string.
///
/// Targets the `/model` suffix with no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelCommand;

impl Command for ModelCommand {
    fn path(&self) -> String {
        "/model".to_string()
    }

    fn payload(&self) -> Option<serde_json::Value> {
        None
    }
}
