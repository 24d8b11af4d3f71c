//! Dice expressions and rollers

pub mod expr;
pub mod roll;

pub use expr::{DiceExpr, Keep};
pub use roll::{DiceRoll, DiceRoller, ScriptedDice, SeededDice};
