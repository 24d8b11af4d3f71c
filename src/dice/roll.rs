//! Dice rollers
//!
//! Everything that needs randomness takes a `&mut dyn DiceRoller`, so tests
//! and physical-dice tables can script the faces.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::expr::DiceExpr;

/// Faces rolled for an expression and the resulting total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub expr: DiceExpr,
    pub results: Vec<u32>,
    /// `None` when the roll could not be evaluated
    pub total: Option<i64>,
}

impl DiceRoll {
    pub fn from_faces(expr: DiceExpr, results: Vec<u32>) -> Self {
        let total = expr.evaluate(&results);
        Self {
            expr,
            results,
            total,
        }
    }

    /// How many dice came up `face`
    pub fn count_of(&self, face: u32) -> usize {
        self.results.iter().filter(|&&r| r == face).count()
    }

    /// e.g. `3d6kl1: [4, 1, 6] = 1`
    pub fn tooltip(&self) -> String {
        let faces = self
            .results
            .iter()
            .map(|face| face.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match self.total {
            Some(total) => format!("{}: [{}] = {}", self.expr, faces, total),
            None => format!("{}: [{}] = ?", self.expr, faces),
        }
    }
}

pub trait DiceRoller {
    fn roll(&mut self, expr: &DiceExpr) -> DiceRoll;
}

/// Deterministic roller for a given seed
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&mut self, expr: &DiceExpr) -> DiceRoll {
        if expr.count > 0 && expr.sides == 0 {
            return DiceRoll {
                expr: *expr,
                results: Vec::new(),
                total: None,
            };
        }
        let faces = (0..expr.count)
            .map(|_| self.rng.gen_range(1..=expr.sides))
            .collect();
        DiceRoll::from_faces(*expr, faces)
    }
}

/// Replays faces in order
///
/// Running out of faces produces a roll with no total.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    pub fn push(&mut self, face: u32) {
        self.faces.push_back(face);
    }

    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, expr: &DiceExpr) -> DiceRoll {
        let wanted = expr.count as usize;
        if self.faces.len() < wanted {
            let results = self.faces.drain(..).collect();
            return DiceRoll {
                expr: *expr,
                results,
                total: None,
            };
        }
        let results = self.faces.drain(..wanted).collect();
        DiceRoll::from_faces(*expr, results)
    }
}
