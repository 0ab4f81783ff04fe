use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Engine configuration, constructed once and passed by reference to the
/// components that need it. There is no module-level default instance;
/// callers own the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Highest draw count at which a bingo still wins the jackpot
    pub jackpot_threshold: u32,
    /// Fraction of each game's prize pool paid into the jackpot
    pub jackpot_contribution_rate: f64,
    /// Amount (minor currency units) the pool resets to after an award
    pub jackpot_minimum: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jackpot_threshold: 40,
            jackpot_contribution_rate: 0.10,
            jackpot_minimum: 5000,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jackpot_threshold == 0 {
            return Err(ConfigError::InvalidValue(
                "jackpot_threshold must be greater than 0".to_string(),
            ));
        }

        if !(self.jackpot_contribution_rate > 0.0 && self.jackpot_contribution_rate <= 1.0) {
            return Err(ConfigError::InvalidValue(
                "jackpot_contribution_rate must be within (0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}
