//! Follow-up action descriptors
//!
//! Outcomes don't run their follow-ups. They hand back a descriptor naming
//! the operation and its arguments, and whoever presents the outcome decides
//! when (and whether) to dispatch it.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::{AttritionError, Result, UnitId};
use crate::escalation::RiskPool;

/// Operations a descriptor can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Overheat,
    Structure,
    StatCheck,
    RollForDestruction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hull,
    Agility,
    Systems,
    Engineering,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stat::Hull => "Hull",
            Stat::Agility => "Agility",
            Stat::Systems => "Systems",
            Stat::Engineering => "Engineering",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub label: String,
    pub target_operation: Operation,
    pub arguments: serde_json::Value,
}

/// A descriptor with its arguments decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Reroll {
        pool: RiskPool,
        unit: UnitId,
        remaining: u32,
    },
    StatCheck {
        unit: UnitId,
        stat: Stat,
    },
    RollForDestruction {
        unit: UnitId,
    },
}

#[derive(Deserialize)]
struct RerollArgs {
    unit: UnitId,
    remaining: u32,
}

#[derive(Deserialize)]
struct StatCheckArgs {
    unit: UnitId,
    stat: Stat,
}

#[derive(Deserialize)]
struct UnitArgs {
    unit: UnitId,
}

impl ActionDescriptor {
    /// Roll the pool's table again at an explicit `remaining`
    pub fn reroll(pool: RiskPool, unit: UnitId, remaining: u32) -> Self {
        let (label, target_operation) = match pool {
            RiskPool::Stress => ("Overheating", Operation::Overheat),
            RiskPool::Structure => ("Structure Damage", Operation::Structure),
        };
        Self {
            label: label.to_string(),
            target_operation,
            arguments: json!({ "unit": unit, "remaining": remaining }),
        }
    }

    pub fn stat_check(unit: UnitId, stat: Stat) -> Self {
        Self {
            label: stat.to_string(),
            target_operation: Operation::StatCheck,
            arguments: json!({ "unit": unit, "stat": stat }),
        }
    }

    pub fn roll_for_destruction(unit: UnitId) -> Self {
        Self {
            label: "Roll for Destruction".to_string(),
            target_operation: Operation::RollForDestruction,
            arguments: json!({ "unit": unit }),
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(encoded: &str) -> Result<Self> {
        Ok(serde_json::from_str(encoded)?)
    }

    /// Decode the arguments for the target operation
    pub fn follow_up(&self) -> Result<FollowUp> {
        match self.target_operation {
            Operation::Overheat | Operation::Structure => {
                let args: RerollArgs = self.arguments()?;
                let pool = if self.target_operation == Operation::Overheat {
                    RiskPool::Stress
                } else {
                    RiskPool::Structure
                };
                Ok(FollowUp::Reroll {
                    pool,
                    unit: args.unit,
                    remaining: args.remaining,
                })
            }
            Operation::StatCheck => {
                let args: StatCheckArgs = self.arguments()?;
                Ok(FollowUp::StatCheck {
                    unit: args.unit,
                    stat: args.stat,
                })
            }
            Operation::RollForDestruction => {
                let args: UnitArgs = self.arguments()?;
                Ok(FollowUp::RollForDestruction { unit: args.unit })
            }
        }
    }

    fn arguments<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.arguments.clone())
            .map_err(|e| AttritionError::InvalidAction(format!("{}: {}", self.label, e)))
    }
}

impl FollowUp {
    pub fn unit(&self) -> UnitId {
        match self {
            FollowUp::Reroll { unit, .. }
            | FollowUp::StatCheck { unit, .. }
            | FollowUp::RollForDestruction { unit } => *unit,
        }
    }
}
