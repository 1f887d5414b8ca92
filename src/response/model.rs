// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model response parsing.

use serde::Deserialize;

/// Device model string from a `/model` read.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::response::ModelInfo;
///
/// let info: ModelInfo = serde_json::from_str(r#"{"model":"CT50 V1.94"}"#).unwrap();
/// assert_eq!(info.model, "CT50 V1.94");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// The model identifier reported by the device.
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_model_info() {
        let info: ModelInfo = serde_json::from_str(r#"{"model":"CT50 V1.94"}"#).unwrap();
        assert_eq!(info.model, "CT50 V1.94");
    }

    #[test]
    fn parse_model_info_missing_field() {
        assert!(serde_json::from_str::<ModelInfo>("{}").is_err());
    }
}
