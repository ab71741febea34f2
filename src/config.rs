//! Game configuration
//!
//! Plain serde structs handed to [`crate::engine::start`]. Validation is
//! eager: a bad quota, interval, or cutter geometry is rejected at
//! construction, never silently clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FIELD_SIZE;

/// Configuration rejected at engine construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("generator.max_items must be greater than zero")]
    ZeroMaxItems,
    #[error("generator.interval_ms must be greater than zero")]
    ZeroInterval,
    #[error("cutter width {0} outside (0, 100]")]
    CutterWidth(f32),
    #[error("cutter left {left} outside [0, {max_left}]")]
    CutterLeft { left: f32, max_left: f32 },
}

/// Initial cutter bar geometry, percentages of the 0-100 viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutterConfig {
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical position of the cut band. Items become cuttable once their
    /// bottom edge falls past this line.
    pub top: f32,
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self {
            left: 40.0,
            width: 20.0,
            height: 3.0,
            top: 95.0,
        }
    }
}

/// Item spawner settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Total number of items spawned over the run (the quota)
    pub max_items: u32,
    /// Spawn period in milliseconds
    pub interval_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_items: 10,
            interval_ms: 1000,
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub cutter: CutterConfig,
    pub generator: GeneratorConfig,
    /// Seed for the spawn-position RNG. `None` seeds from entropy; a fixed
    /// seed reproduces the same spawn positions run after run.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Check the configuration against the ranges the simulation assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.max_items == 0 {
            return Err(ConfigError::ZeroMaxItems);
        }
        if self.generator.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.cutter.width <= 0.0 || self.cutter.width > FIELD_SIZE {
            return Err(ConfigError::CutterWidth(self.cutter.width));
        }
        let max_left = FIELD_SIZE - self.cutter.width;
        if self.cutter.left < 0.0 || self.cutter.left > max_left {
            return Err(ConfigError::CutterLeft {
                left: self.cutter.left,
                max_left,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_quota_rejected() {
        let mut config = GameConfig::default();
        config.generator.max_items = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxItems));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = GameConfig::default();
        config.generator.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_bad_cutter_width_rejected() {
        let mut config = GameConfig::default();
        config.cutter.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::CutterWidth(_))));

        config.cutter.width = 150.0;
        assert!(matches!(config.validate(), Err(ConfigError::CutterWidth(_))));
    }

    #[test]
    fn test_out_of_bounds_cutter_rejected() {
        let mut config = GameConfig::default();
        config.cutter.left = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CutterLeft { .. })
        ));

        // Width 20 leaves room up to left = 80
        config.cutter.left = 81.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CutterLeft { .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig {
            seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
