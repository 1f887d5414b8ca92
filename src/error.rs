// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `radiotherm` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, HTTP communication, and JSON parsing.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when
/// interacting with a thermostat.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A weekday abbreviation outside `mon`..`sun` was provided.
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    /// A weekday index outside 0-6 was provided.
    #[error("weekday index {0} is out of range [0, 6]")]
    WeekdayIndexOutOfRange(u8),

    /// A setpoint temperature is outside the device's accepted range.
    #[error("setpoint {0}\u{b0}F is out of range [35, 95]")]
    SetpointOutOfRange(f32),

    /// An invalid thermostat operating mode code was provided.
    #[error("invalid thermostat mode: {0}")]
    InvalidThermostatMode(u8),

    /// An invalid fan mode code was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(u8),

    /// An invalid hold or override flag value was provided.
    #[error("invalid flag value: {0}")]
    InvalidFlag(u8),

    /// An invalid energy LED level was provided.
    ///
    /// The device only accepts levels 0, 1, 2 and 4.
    #[error("invalid energy LED level: {0}")]
    InvalidLedLevel(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed (connection refused, timeout, DNS failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device replied with a non-success status code.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid device address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownWeekday("xyz".to_string());
        assert_eq!(err.to_string(), "unknown weekday: xyz");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidThermostatMode(7);
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidThermostatMode(7))
        ));
    }

    #[test]
    fn setpoint_error_display() {
        let err = ValueError::SetpointOutOfRange(120.0);
        assert_eq!(err.to_string(), "setpoint 120\u{b0}F is out of range [35, 95]");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("tmode".to_string());
        assert_eq!(err.to_string(), "missing field in response: tmode");
    }
}
