//! # Hub Settings
//!
//! Optional display preferences. Every field has a default, so the hub
//! runs with no configuration at all; hosts may load overrides from JSON.
//!
//! ```rust
//! use calc_core::calculations::CalculatorId;
//! use calc_core::settings::HubSettings;
//!
//! let settings = HubSettings::from_json(r#"{ "start_calculator": "emi" }"#).unwrap();
//! assert_eq!(settings.start_calculator, CalculatorId::Emi);
//! assert_eq!(settings.decimals, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorId;
use crate::errors::CalcResult;
use crate::numeric::MAX_DECIMALS;
use crate::registry::REGISTRY;

/// Default fractional digits in formatted outputs
pub const DEFAULT_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubSettings {
    /// Fractional digits shown in outputs (0..=10)
    pub decimals: usize,
    /// Tab that is active when the hub starts
    pub start_calculator: CalculatorId,
}

impl Default for HubSettings {
    fn default() -> Self {
        HubSettings {
            decimals: DEFAULT_DECIMALS,
            start_calculator: REGISTRY.first().map(|e| e.id).unwrap_or(CalculatorId::Basic),
        }
    }
}

impl HubSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: HubSettings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    /// Same settings with precision clamped to the supported range
    pub fn normalized(self) -> Self {
        HubSettings {
            decimals: self.decimals.min(MAX_DECIMALS),
            ..self
        }
    }

    pub fn with_decimals(self, decimals: usize) -> Self {
        HubSettings { decimals, ..self }.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HubSettings::default();
        assert_eq!(settings.decimals, 2);
        assert_eq!(settings.start_calculator, CalculatorId::Basic);
        assert_eq!(HubSettings::from_json("{}").unwrap(), settings);
    }

    #[test]
    fn test_decimals_are_clamped() {
        let settings = HubSettings::from_json(r#"{ "decimals": 40 }"#).unwrap();
        assert_eq!(settings.decimals, MAX_DECIMALS);
        assert_eq!(HubSettings::default().with_decimals(4).decimals, 4);
    }

    #[test]
    fn test_bad_json() {
        let err = HubSettings::from_json(r#"{ "start_calculator": "mortgage" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(HubSettings::from_json("not json").is_err());
    }
}
