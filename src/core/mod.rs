pub mod config;
pub mod error;
pub mod types;

pub use config::{AutomationConfig, DiceConfig, EngineConfig, OverchargeConfig};
pub use error::{AttritionError, Result};
pub use types::UnitId;
