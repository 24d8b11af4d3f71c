use thiserror::Error;

use crate::unit::UnitKind;

#[derive(Error, Debug)]
pub enum AttritionError {
    #[error("{unit} can't {operation}: {kind} units have no use for it")]
    Unsupported {
        unit: String,
        kind: UnitKind,
        operation: &'static str,
    },

    #[error("{unit} has no {pool} pool")]
    MissingPool { unit: String, pool: &'static str },

    #[error("Invalid dice expression: {0:?}")]
    InvalidDice(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AttritionError>;
