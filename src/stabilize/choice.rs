//! The two choices a stabilizing unit makes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AttritionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryChoice {
    /// Vent all heat and clear EXPOSED
    Cool,
    /// Spend a repair
    Repair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryChoice {
    ClearBurn,
    ClearOwnCondition,
    ClearAlliedCondition,
    Reload,
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

impl FromStr for PrimaryChoice {
    type Err = AttritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cool" => Ok(PrimaryChoice::Cool),
            "repair" => Ok(PrimaryChoice::Repair),
            _ => Err(AttritionError::InvalidAction(format!(
                "unknown stabilize choice {:?}",
                s
            ))),
        }
    }
}

impl FromStr for SecondaryChoice {
    type Err = AttritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "clear_burn" | "burn" => Ok(SecondaryChoice::ClearBurn),
            "clear_own_condition" | "own_condition" => Ok(SecondaryChoice::ClearOwnCondition),
            "clear_allied_condition" | "allied_condition" | "ally" => {
                Ok(SecondaryChoice::ClearAlliedCondition)
            }
            "reload" => Ok(SecondaryChoice::Reload),
            _ => Err(AttritionError::InvalidAction(format!(
                "unknown stabilize choice {:?}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("Cool".parse::<PrimaryChoice>().unwrap(), PrimaryChoice::Cool);
        assert_eq!(
            "clear-burn".parse::<SecondaryChoice>().unwrap(),
            SecondaryChoice::ClearBurn
        );
        assert_eq!(
            "clear allied condition".parse::<SecondaryChoice>().unwrap(),
            SecondaryChoice::ClearAlliedCondition
        );
    }

    #[test]
    fn test_unknown_choice() {
        assert!("overclock".parse::<PrimaryChoice>().is_err());
        assert!("nap".parse::<SecondaryChoice>().is_err());
    }
}
