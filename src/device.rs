// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level thermostat abstraction.
//!
//! This module provides one method per device capability, each a thin
//! declarative call through the command layer: build a command, send it
//! over the protocol, parse the reply.

use crate::command::{
    Command, EnergyLedCommand, FanModeCommand, HoldCommand, ModeCommand, ModelCommand,
    OverrideCommand, ProgramCommand, SetpointCommand, SetpointField, StatusCommand,
};
use crate::error::Error;
use crate::protocol::{CommandResponse, HttpClient, HttpConfig, Protocol};
use crate::response::{ModelInfo, ThermostatStatus};
use crate::types::{
    DaySchedule, EnergyLed, FanMode, HoldState, OverrideState, ProgramKind, Setpoint,
    ThermostatMode, WeekProgram, Weekday,
};

/// A single networked thermostat.
///
/// Wraps a transport and exposes one method per device operation. The
/// client holds no mutable state; every call is one independent HTTP
/// round trip.
///
/// # Examples
///
/// ```no_run
/// use radiotherm_lib::Thermostat;
/// use radiotherm_lib::types::Setpoint;
///
/// # async fn example() -> radiotherm_lib::Result<()> {
/// let tstat = Thermostat::http("192.168.1.120")?;
///
/// let status = tstat.status().await?;
/// println!("current temperature: {}", status.temp);
///
/// tstat.set_cool_setpoint(Setpoint::new(72.0)?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Thermostat<P: Protocol> {
    protocol: P,
}

impl Thermostat<HttpClient> {
    /// Creates a thermostat client for a device at the given host.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn http(host: impl Into<String>) -> Result<Self, Error> {
        let client = HttpClient::new(host).map_err(Error::Protocol)?;
        Ok(Self::new(client))
    }

    /// Creates a thermostat client from an explicit HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(config: HttpConfig) -> Result<Self, Error> {
        let client = config.into_client().map_err(Error::Protocol)?;
        Ok(Self::new(client))
    }
}

impl<P: Protocol> Thermostat<P> {
    /// Creates a thermostat over an existing transport.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Sends a command to the device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, Error> {
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    // ========== Reads ==========

    /// Reads the device's full state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn status(&self) -> Result<ThermostatStatus, Error> {
        let response = self.send_command(&StatusCommand).await?;
        response.parse().map_err(Error::Parse)
    }

    /// Reads the device model.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn model(&self) -> Result<ModelInfo, Error> {
        let response = self.send_command(&ModelCommand).await?;
        response.parse().map_err(Error::Parse)
    }

    // ========== Setpoints ==========

    /// Sets the cooling setpoint, switching the device to cool mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_cool_setpoint(&self, value: Setpoint) -> Result<CommandResponse, Error> {
        self.send_command(&SetpointCommand::cool(value)).await
    }

    /// Sets the heating setpoint, switching the device to heat mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_heat_setpoint(&self, value: Setpoint) -> Result<CommandResponse, Error> {
        self.send_command(&SetpointCommand::heat(value)).await
    }

    /// Sets a single setpoint field, optionally with an explicit mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_setpoint(
        &self,
        field: SetpointField,
        value: Setpoint,
        tmode: Option<ThermostatMode>,
    ) -> Result<CommandResponse, Error> {
        let cmd = match tmode {
            Some(mode) => SetpointCommand::generic_with_mode(field, value, mode),
            None => SetpointCommand::generic(field, value),
        };
        self.send_command(&cmd).await
    }

    // ========== Modes and flags ==========

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_mode(&self, mode: ThermostatMode) -> Result<CommandResponse, Error> {
        self.send_command(&ModeCommand::new(mode)).await
    }

    /// Sets the fan mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_fan_mode(&self, mode: FanMode) -> Result<CommandResponse, Error> {
        self.send_command(&FanModeCommand::new(mode)).await
    }

    /// Sets the schedule hold flag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_hold(&self, state: HoldState) -> Result<CommandResponse, Error> {
        self.send_command(&HoldCommand::new(state)).await
    }

    /// Sets the override flag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_override(&self, state: OverrideState) -> Result<CommandResponse, Error> {
        self.send_command(&OverrideCommand::new(state)).await
    }

    /// Sets the front-panel energy LED level.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_energy_led(&self, led: EnergyLed) -> Result<CommandResponse, Error> {
        self.send_command(&EnergyLedCommand::new(led)).await
    }

    // ========== Programs ==========

    /// Reads the whole-week heating program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn heat_program(&self) -> Result<WeekProgram, Error> {
        self.get_program(ProgramKind::Heat, None).await
    }

    /// Reads one day of the heating program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn heat_program_day(&self, day: Weekday) -> Result<WeekProgram, Error> {
        self.get_program(ProgramKind::Heat, Some(day)).await
    }

    /// Reads the whole-week cooling program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn cool_program(&self) -> Result<WeekProgram, Error> {
        self.get_program(ProgramKind::Cool, None).await
    }

    /// Reads one day of the cooling program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// parsed.
    pub async fn cool_program_day(&self, day: Weekday) -> Result<WeekProgram, Error> {
        self.get_program(ProgramKind::Cool, Some(day)).await
    }

    /// Writes one day of the heating program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_heat_program_day(
        &self,
        day: Weekday,
        schedule: DaySchedule,
    ) -> Result<CommandResponse, Error> {
        self.send_command(&ProgramCommand::set_day(ProgramKind::Heat, day, schedule))
            .await
    }

    /// Writes the whole-week heating program.
    ///
    /// The mapping is submitted exactly as given; the device accepts
    /// partial weeks.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_heat_program_week(
        &self,
        program: WeekProgram,
    ) -> Result<CommandResponse, Error> {
        self.send_command(&ProgramCommand::set_week(ProgramKind::Heat, program))
            .await
    }

    /// Writes one day of the cooling program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_cool_program_day(
        &self,
        day: Weekday,
        schedule: DaySchedule,
    ) -> Result<CommandResponse, Error> {
        self.send_command(&ProgramCommand::set_day(ProgramKind::Cool, day, schedule))
            .await
    }

    /// Writes the whole-week cooling program.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_cool_program_week(
        &self,
        program: WeekProgram,
    ) -> Result<CommandResponse, Error> {
        self.send_command(&ProgramCommand::set_week(ProgramKind::Cool, program))
            .await
    }

    async fn get_program(
        &self,
        kind: ProgramKind,
        day: Option<Weekday>,
    ) -> Result<WeekProgram, Error> {
        let cmd = match day {
            Some(day) => ProgramCommand::get_day(kind, day),
            None => ProgramCommand::get_week(kind),
        };
        let response = self.send_command(&cmd).await?;
        response.parse().map_err(Error::Parse)
    }
}
