// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full-status response parsing.

use serde::Deserialize;

use crate::types::{FanMode, HoldState, OverrideState, ThermostatMode, Weekday};

/// Complete device state from a base-endpoint read.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::response::ThermostatStatus;
/// use radiotherm_lib::types::ThermostatMode;
///
/// let json = r#"{
///     "temp": 71.50, "tmode": 2, "fmode": 0, "override": 0, "hold": 0,
///     "t_cool": 72.50, "time": {"day": 3, "hour": 14, "minute": 51}
/// }"#;
/// let status: ThermostatStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.temp, 71.50);
/// assert_eq!(status.tmode, Some(ThermostatMode::Cool));
/// assert_eq!(status.t_cool, Some(72.50));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ThermostatStatus {
    /// Current measured temperature in °F.
    pub temp: f32,

    /// Operating mode.
    #[serde(default)]
    pub tmode: Option<ThermostatMode>,

    /// Fan mode.
    #[serde(default)]
    pub fmode: Option<FanMode>,

    /// Override flag.
    #[serde(default, rename = "override")]
    pub override_state: Option<OverrideState>,

    /// Hold flag.
    #[serde(default)]
    pub hold: Option<HoldState>,

    /// Cooling setpoint, present in cool mode.
    #[serde(default)]
    pub t_cool: Option<f32>,

    /// Heating setpoint, present in heat mode.
    #[serde(default)]
    pub t_heat: Option<f32>,

    /// HVAC state (0 = off, 1 = heating, 2 = cooling).
    #[serde(default)]
    pub tstate: Option<u8>,

    /// Fan state (0 = off, 1 = running).
    #[serde(default)]
    pub fstate: Option<u8>,

    /// The device's local time.
    #[serde(default)]
    pub time: Option<DeviceTime>,
}

impl ThermostatStatus {
    /// Returns the active setpoint for the current mode, if any.
    #[must_use]
    pub fn active_setpoint(&self) -> Option<f32> {
        match self.tmode {
            Some(ThermostatMode::Heat) => self.t_heat,
            Some(ThermostatMode::Cool) => self.t_cool,
            _ => self.t_heat.or(self.t_cool),
        }
    }

    /// Returns `true` if the HVAC is currently heating or cooling.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.tstate, Some(1 | 2))
    }
}

/// The device's local time as reported in status reads.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeviceTime {
    /// Weekday index (Monday = 0).
    pub day: u8,
    /// Hour of day (0-23).
    pub hour: u8,
    /// Minute of hour (0-59).
    pub minute: u8,
}

impl DeviceTime {
    /// Returns the weekday, if the reported index is valid.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_index(self.day).ok()
    }

    /// Returns the minute of day (0-1439), the unit program schedules
    /// use.
    #[must_use]
    pub fn minute_of_day(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}
