// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode, fan mode, and schedule flag types.
//!
//! These map to the numeric codes the thermostat uses on the wire for
//! `tmode`, `fmode`, `hold` and `override` fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Thermostat operating mode (`tmode`).
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::ThermostatMode;
///
/// assert_eq!(ThermostatMode::Cool.as_num(), 2);
/// assert_eq!(ThermostatMode::try_from(1).unwrap(), ThermostatMode::Heat);
/// assert!(ThermostatMode::try_from(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ThermostatMode {
    /// HVAC off.
    Off,
    /// Heating mode.
    Heat,
    /// Cooling mode.
    Cool,
    /// Automatic heat/cool selection.
    Auto,
}

impl ThermostatMode {
    /// Returns the numeric `tmode` code.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
            Self::Auto => 3,
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Auto => "auto",
        };
        write!(f, "{name}")
    }
}

impl From<ThermostatMode> for u8 {
    fn from(mode: ThermostatMode) -> Self {
        mode.as_num()
    }
}

impl TryFrom<u8> for ThermostatMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            3 => Ok(Self::Auto),
            _ => Err(ValueError::InvalidThermostatMode(value)),
        }
    }
}

/// Fan operating mode (`fmode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FanMode {
    /// Fan runs only when heating or cooling.
    Auto,
    /// Periodic circulation.
    Circulate,
    /// Fan always on.
    On,
}

impl FanMode {
    /// Returns the numeric `fmode` code.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Circulate => 1,
            Self::On => 2,
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Circulate => "circulate",
            Self::On => "on",
        };
        write!(f, "{name}")
    }
}

impl From<FanMode> for u8 {
    fn from(mode: FanMode) -> Self {
        mode.as_num()
    }
}

impl TryFrom<u8> for FanMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Circulate),
            2 => Ok(Self::On),
            _ => Err(ValueError::InvalidFanMode(value)),
        }
    }
}

/// Target-temperature hold flag (`hold`).
///
/// When enabled, scheduled program transitions are suspended and the
/// current setpoint stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HoldState {
    /// Program transitions apply normally.
    Disabled,
    /// Current setpoint is held.
    Enabled,
}

impl HoldState {
    /// Returns the numeric `hold` flag value.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }
}

impl From<bool> for HoldState {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl From<HoldState> for u8 {
    fn from(state: HoldState) -> Self {
        state.as_num()
    }
}

impl TryFrom<u8> for HoldState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            _ => Err(ValueError::InvalidFlag(value)),
        }
    }
}

/// Temporary manual override flag (`override`).
///
/// Set by the device when a setpoint deviates from the active program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OverrideState {
    /// Following the active program.
    Disabled,
    /// Manual deviation active until the next program transition.
    Enabled,
}

impl OverrideState {
    /// Returns the numeric `override` flag value.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }
}

impl From<bool> for OverrideState {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl From<OverrideState> for u8 {
    fn from(state: OverrideState) -> Self {
        state.as_num()
    }
}

impl TryFrom<u8> for OverrideState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            _ => Err(ValueError::InvalidFlag(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermostat_mode_codes() {
        assert_eq!(ThermostatMode::Off.as_num(), 0);
        assert_eq!(ThermostatMode::Heat.as_num(), 1);
        assert_eq!(ThermostatMode::Cool.as_num(), 2);
        assert_eq!(ThermostatMode::Auto.as_num(), 3);
    }

    #[test]
    fn thermostat_mode_try_from_invalid() {
        assert!(matches!(
            ThermostatMode::try_from(4),
            Err(ValueError::InvalidThermostatMode(4))
        ));
    }

    #[test]
    fn fan_mode_codes() {
        assert_eq!(FanMode::Auto.as_num(), 0);
        assert_eq!(FanMode::Circulate.as_num(), 1);
        assert_eq!(FanMode::On.as_num(), 2);
        assert!(FanMode::try_from(3).is_err());
    }

    #[test]
    fn hold_state_from_bool() {
        assert_eq!(HoldState::from(true), HoldState::Enabled);
        assert_eq!(HoldState::from(false), HoldState::Disabled);
    }

    #[test]
    fn flags_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&HoldState::Enabled).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&OverrideState::Disabled).unwrap(),
            "0"
        );
        assert_eq!(serde_json::to_string(&ThermostatMode::Cool).unwrap(), "2");
    }

    #[test]
    fn modes_deserialize_from_numbers() {
        let mode: ThermostatMode = serde_json::from_str("1").unwrap();
        assert_eq!(mode, ThermostatMode::Heat);
        let fan: FanMode = serde_json::from_str("2").unwrap();
        assert_eq!(fan, FanMode::On);
        assert!(serde_json::from_str::<ThermostatMode>("9").is_err());
    }

    #[test]
    fn mode_display() {
        assert_eq!(ThermostatMode::Auto.to_string(), "auto");
        assert_eq!(FanMode::Circulate.to_string(), "circulate");
    }
}
