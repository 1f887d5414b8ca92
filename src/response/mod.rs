// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for thermostat JSON responses.
//!
//! This module provides structures for deserializing JSON responses
//! from the device. The raw body remains available through
//! [`crate::protocol::CommandResponse`] for callers that need it.

mod model;
mod status;

pub use model::ModelInfo;
pub use status::{DeviceTime, ThermostatStatus};
