//! Engine configuration
//!
//! Every switch the engine consults lives here and is handed to the entry
//! points explicitly. Nothing is read from ambient or global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{AttritionError, Result};
use crate::damage::ArmorPolicy;

/// Heat costs of successive overcharges when no bonus overrides them
pub const DEFAULT_OVERCHARGE_SEQUENCE: [&str; 4] = ["+1", "+1d3", "+1d6", "+1d6+4"];

/// Minimum number of steps an overcharge sequence must define to be usable
pub const MIN_OVERCHARGE_STEPS: usize = 4;

/// Top-level engine configuration
///
/// Loaded from TOML. Every section is optional; missing sections fall back
/// to their defaults.
///
/// ```toml
/// [automation]
/// enabled = true
/// armor_policy = "defender_favored"
///
/// [overcharge]
/// sequence = ["+1", "+1d3", "+1d6", "+1d6+4"]
///
/// [dice]
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub automation: AutomationConfig,
    pub overcharge: OverchargeConfig,
    pub dice: DiceConfig,
}

/// Automation switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Whether damage writes report pending overheat/structure checks
    ///
    /// When disabled the engine still resolves damage, but leaves it to the
    /// table to notice that a pool overflowed.
    pub enabled: bool,

    /// Which side armor favors when a hit mixes resisted and unresisted types
    ///
    /// Defender-favored spends armor on unresisted damage first, so the
    /// resistance halving applies to as much damage as possible.
    pub armor_policy: ArmorPolicy,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            armor_policy: ArmorPolicy::DefenderFavored,
        }
    }
}

/// Overcharge heat costs, indexed by the mech's overcharge level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverchargeConfig {
    pub sequence: Vec<String>,
}

impl Default for OverchargeConfig {
    fn default() -> Self {
        Self {
            sequence: DEFAULT_OVERCHARGE_SEQUENCE
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Dice settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    /// Fixed seed for reproducible rolls; entropy when absent
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for step in &self.overcharge.sequence {
            step.parse::<crate::dice::DiceExpr>().map_err(|_| {
                AttritionError::InvalidConfig(format!(
                    "overcharge step {:?} is not a dice expression",
                    step
                ))
            })?;
        }
        Ok(())
    }
}
