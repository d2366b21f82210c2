//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::topsis::IdealSolutionPolicy;

/// Largest supported number of decimal places in displayed results.
pub const MAX_DISPLAY_PRECISION: u32 = 12;

/// Fuzzy TOPSIS engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Ideal solution policy used when a request doesn't choose one
    #[serde(default)]
    pub ideal_solution_policy: IdealSolutionPolicy,

    /// Decimal places for coefficients and distances in responses
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ValidationError::DisplayPrecisionTooLarge {
                max: MAX_DISPLAY_PRECISION,
                actual: self.display_precision,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ideal_solution_policy: IdealSolutionPolicy::default(),
            display_precision: default_display_precision(),
        }
    }
}

fn default_display_precision() -> u32 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.ideal_solution_policy, IdealSolutionPolicy::DataDerived);
        assert_eq!(config.display_precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_rejects_large_precision() {
        let config = EngineConfig {
            display_precision: 13,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::DisplayPrecisionTooLarge {
                max: 12,
                actual: 13
            })
        );
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{
            "ideal_solution_policy": "fixed_unit_interval",
            "display_precision": 6
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.ideal_solution_policy,
            IdealSolutionPolicy::FixedUnitInterval
        );
        assert_eq!(config.display_precision, 6);
    }

    #[test]
    fn test_engine_config_partial_deserialization_uses_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
