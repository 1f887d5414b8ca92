// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint type for target temperatures.
//!
//! The CT50 accepts target temperatures between 35.0 and 95.0 °F for both
//! `t_heat` and `t_cool`.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// A target temperature in degrees Fahrenheit (35.0-95.0).
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::Setpoint;
///
/// let sp = Setpoint::new(72.0).unwrap();
/// assert_eq!(sp.degrees(), 72.0);
///
/// // Out-of-range values return an error
/// assert!(Setpoint::new(120.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Setpoint(f32);

impl Setpoint {
    /// Lowest temperature the device accepts.
    pub const MIN_F: f32 = 35.0;

    /// Highest temperature the device accepts.
    pub const MAX_F: f32 = 95.0;

    /// Creates a new setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::SetpointOutOfRange` if the temperature falls
    /// outside 35.0-95.0 °F or is not finite.
    pub fn new(degrees_f: f32) -> Result<Self, ValueError> {
        if !degrees_f.is_finite() || !(Self::MIN_F..=Self::MAX_F).contains(&degrees_f) {
            return Err(ValueError::SetpointOutOfRange(degrees_f));
        }
        Ok(Self(degrees_f))
    }

    /// Returns the temperature in degrees Fahrenheit.
    #[must_use]
    pub const fn degrees(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{b0}F", self.0)
    }
}

impl TryFrom<f32> for Setpoint {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
