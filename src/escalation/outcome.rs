//! Table outcomes and their presentation payload

use serde::{Deserialize, Serialize};

use super::table::RiskPool;
use crate::actions::ActionDescriptor;
use crate::dice::DiceRoll;

/// Label shown when two or more dice came up 1
pub const MULTIPLE_ONES_LABEL: &str = "Multiple Ones";

/// One roll on a risk table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationOutcome {
    pub pool: RiskPool,
    pub index: usize,
    pub title: String,
    pub narrative: String,
    /// The rolled total, "Multiple Ones", or empty when nothing was rolled
    pub total_label: String,
    /// Pool tiers left when the table was rolled
    pub remaining: u32,
    pub max: u32,
    /// Absent for the terminal outcome, which rolls nothing
    pub roll: Option<DiceRoll>,
    pub secondary_action: Option<ActionDescriptor>,
    pub reroll_action: Option<ActionDescriptor>,
    /// The pool was already empty
    pub terminal: bool,
}

/// What a chat card or log line needs to show an outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub value: u32,
    pub max: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub title: String,
    pub total_label: String,
    pub narrative_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_detail: Option<DiceRoll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<ActionDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reroll_action: Option<ActionDescriptor>,
}

impl EscalationOutcome {
    pub fn presentation(&self) -> Presentation {
        Presentation {
            value: self.remaining,
            max: self.max,
            tooltip: self.roll.as_ref().map(DiceRoll::tooltip),
            title: self.title.clone(),
            total_label: self.total_label.clone(),
            narrative_text: self.narrative.clone(),
            roll_detail: self.roll.clone(),
            secondary_action: self.secondary_action.clone(),
            reroll_action: self.reroll_action.clone(),
        }
    }

    pub fn is_multiple_ones(&self) -> bool {
        self.total_label == MULTIPLE_ONES_LABEL
    }
}
