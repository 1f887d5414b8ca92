// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint commands.
//!
//! Setting a cooling or heating target also forces the matching
//! operating mode, the way the device expects; the generic variant
//! leaves the mode alone unless one is given.

use serde_json::json;

use crate::command::Command;
use crate::types::{Setpoint, ThermostatMode};

/// The device field a setpoint write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetpointField {
    /// Cooling target (`t_cool`).
    Cool,
    /// Heating target (`t_heat`).
    Heat,
}

impl SetpointField {
    /// Returns the JSON field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cool => "t_cool",
            Self::Heat => "t_heat",
        }
    }
}

/// Command to set a target temperature.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::command::{Command, SetpointCommand};
/// use radiotherm_lib::types::Setpoint;
///
/// let cmd = SetpointCommand::heat(Setpoint::new(68.0).unwrap());
/// assert_eq!(
///     cmd.payload().unwrap(),
///     serde_json::json!({"tmode": 1, "t_heat": 68.0})
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetpointCommand {
    /// Set the cooling setpoint, switching the device to cool mode.
    Cool(Setpoint),
    /// Set the heating setpoint, switching the device to heat mode.
    Heat(Setpoint),
    /// Set a single setpoint field, optionally with an explicit mode.
    Generic {
        /// The setpoint field to write.
        field: SetpointField,
        /// The target temperature.
        value: Setpoint,
        /// Operating mode to submit alongside the setpoint, if any.
        tmode: Option<ThermostatMode>,
    },
}

impl SetpointCommand {
    /// Creates a cooling setpoint command.
    #[must_use]
    pub const fn cool(value: Setpoint) -> Self {
        Self::Cool(value)
    }

    /// Creates a heating setpoint command.
    #[must_use]
    pub const fn heat(value: Setpoint) -> Self {
        Self::Heat(value)
    }

    /// Creates a generic setpoint command without touching the mode.
    #[must_use]
    pub const fn generic(field: SetpointField, value: Setpoint) -> Self {
        Self::Generic {
            field,
            value,
            tmode: None,
        }
    }

    /// Creates a generic setpoint command with an explicit mode.
    #[must_use]
    pub const fn generic_with_mode(
        field: SetpointField,
        value: Setpoint,
        tmode: ThermostatMode,
    ) -> Self {
        Self::Generic {
            field,
            value,
            tmode: Some(tmode),
        }
    }
}

impl Command for SetpointCommand {
    fn payload(&self) -> Option<serde_json::Value> {
        let body = match self {
            Self::Cool(value) => json!({
                "tmode": ThermostatMode::Cool.as_num(),
                "t_cool": value,
            }),
            Self::Heat(value) => json!({
                "tmode": ThermostatMode::Heat.as_num(),
                "t_heat": value,
            }),
            Self::Generic {
                field,
                value,
                tmode,
            } => match tmode {
                Some(mode) => json!({
                    "tmode": mode.as_num(),
                    (field.key()): value,
                }),
                None => json!({ (field.key()): value }),
            },
        };
        Some(body)
    }
}
