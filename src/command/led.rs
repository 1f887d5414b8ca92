// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy LED command.

use serde_json::json;

use crate::command::Command;
use crate::types::EnergyLed;

/// Command to set the front-panel energy LED.
///
/// Targets the `/led` suffix with an integer level; the level is always
/// submitted as a JSON number even when constructed from digit text.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::command::{Command, EnergyLedCommand};
/// use radiotherm_lib::types::EnergyLed;
///
/// let cmd = EnergyLedCommand::new(EnergyLed::Yellow);
/// assert_eq!(cmd.path(), "/led");
/// assert_eq!(cmd.payload().unwrap(), serde_json::json!({"energy_led": 2}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyLedCommand(EnergyLed);

impl EnergyLedCommand {
    /// Creates an energy LED command.
    #[must_use]
    pub const fn new(led: EnergyLed) -> Self {
        Self(led)
    }
}

impl Command for EnergyLedCommand {
    fn path(&self) -> String {
        "/led".to_string()
    }

    fn payload(&self) -> Option<serde_json::Value> {
        Some(json!({"energy_led": self.0.as_num()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_command_targets_led_suffix() {
        let cmd = EnergyLedCommand::new(EnergyLed::Green);
        assert_eq!(cmd.path(), "/led");
        assert_eq!(cmd.payload().unwrap(), json!({"energy_led": 1}));
    }

    #[test]
    fn led_command_from_text_level() {
        let led: EnergyLed = "2".parse().unwrap();
        let cmd = EnergyLedCommand::new(led);
        assert_eq!(cmd.payload().unwrap(), json!({"energy_led": 2}));
    }
}
