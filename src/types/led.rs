// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy LED type.
//!
//! The CT50 front-panel energy LED accepts four levels: 0 (off),
//! 1 (green), 2 (yellow) and 4 (red).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// Energy LED level.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::EnergyLed;
///
/// let led = EnergyLed::new(2).unwrap();
/// assert_eq!(led, EnergyLed::Yellow);
/// assert_eq!(led.as_num(), 2);
///
/// // Digit strings are accepted too
/// let led: EnergyLed = "4".parse().unwrap();
/// assert_eq!(led, EnergyLed::Red);
///
/// // Level 3 does not exist on the device
/// assert!(EnergyLed::new(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum EnergyLed {
    /// LED off (level 0).
    Off,
    /// Green (level 1).
    Green,
    /// Yellow (level 2).
    Yellow,
    /// Red (level 4).
    Red,
}

impl EnergyLed {
    /// Creates an energy LED level from its numeric code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidLedLevel` for any value other than
    /// 0, 1, 2 or 4.
    pub fn new(level: u8) -> Result<Self, ValueError> {
        match level {
            0 => Ok(Self::Off),
            1 => Ok(Self::Green),
            2 => Ok(Self::Yellow),
            4 => Ok(Self::Red),
            _ => Err(ValueError::InvalidLedLevel(level.to_string())),
        }
    }

    /// Returns the numeric level sent to the device.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Green => 1,
            Self::Yellow => 2,
            Self::Red => 4,
        }
    }
}

impl fmt::Display for EnergyLed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        };
        write!(f, "{name}")
    }
}

impl From<EnergyLed> for u8 {
    fn from(led: EnergyLed) -> Self {
        led.as_num()
    }
}

impl TryFrom<u8> for EnergyLed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EnergyLed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| ValueError::InvalidLedLevel(s.to_string()))?;
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_valid_levels() {
        assert_eq!(EnergyLed::new(0).unwrap(), EnergyLed::Off);
        assert_eq!(EnergyLed::new(1).unwrap(), EnergyLed::Green);
        assert_eq!(EnergyLed::new(2).unwrap(), EnergyLed::Yellow);
        assert_eq!(EnergyLed::new(4).unwrap(), EnergyLed::Red);
    }

    #[test]
    fn led_invalid_levels() {
        assert!(EnergyLed::new(3).is_err());
        assert!(EnergyLed::new(5).is_err());
    }

    #[test]
    fn led_from_digit_string() {
        assert_eq!("2".parse::<EnergyLed>().unwrap(), EnergyLed::Yellow);
        assert_eq!(" 0 ".parse::<EnergyLed>().unwrap(), EnergyLed::Off);
    }

    #[test]
    fn led_from_invalid_string() {
        assert!("green".parse::<EnergyLed>().is_err());
        assert!("3".parse::<EnergyLed>().is_err());
        assert!("".parse::<EnergyLed>().is_err());
    }

    #[test]
    fn led_serializes_as_number() {
        assert_eq!(serde_json::to_string(&EnergyLed::Red).unwrap(), "4");
    }
}
