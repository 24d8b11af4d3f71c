//! Dice notation
//!
//! Supported forms: `3d6`, `d6`, `3d6kl1`, `2d20kh1`, `1d6+4`, `+1d3`, `+1`, `-2`.

use std::fmt;
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, u32 as decimal};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use crate::core::{AttritionError, Result};

/// Which dice count toward the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keep {
    All,
    Lowest(u32),
    Highest(u32),
}

/// `count`d`sides`, keep rule, flat modifier
///
/// A flat expression (`+1`) has `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    pub count: u32,
    pub sides: u32,
    pub keep: Keep,
    pub modifier: i64,
}

impl DiceExpr {
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count,
            sides,
            keep: Keep::All,
            modifier: 0,
        }
    }

    /// Roll `count` dice and keep the single lowest
    pub fn keep_lowest(count: u32, sides: u32) -> Self {
        Self {
            keep: Keep::Lowest(1),
            ..Self::new(count, sides)
        }
    }

    /// No dice, just a number
    pub fn flat(value: i64) -> Self {
        Self {
            count: 0,
            sides: 0,
            keep: Keep::All,
            modifier: value,
        }
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn is_flat(&self) -> bool {
        self.count == 0
    }

    /// Total for a set of faces, or `None` if the faces can't have come
    /// from this expression or the total doesn't fit
    pub fn evaluate(&self, faces: &[u32]) -> Option<i64> {
        if faces.len() != self.count as usize {
            return None;
        }
        if faces.iter().any(|&face| face == 0 || face > self.sides) {
            return None;
        }

        let mut sorted = faces.to_vec();
        sorted.sort_unstable();
        let kept: &[u32] = match self.keep {
            Keep::All => &sorted,
            Keep::Lowest(n) => &sorted[..(n as usize).min(sorted.len())],
            Keep::Highest(n) => &sorted[sorted.len().saturating_sub(n as usize)..],
        };

        let sum: i64 = kept.iter().map(|&face| i64::from(face)).sum();
        sum.checked_add(self.modifier)
    }

    fn validate(self, text: &str) -> Result<Self> {
        if self.is_flat() {
            return Ok(self);
        }
        let keep_ok = match self.keep {
            Keep::All => true,
            Keep::Lowest(n) | Keep::Highest(n) => n > 0,
        };
        if self.sides == 0 || !keep_ok {
            return Err(AttritionError::InvalidDice(text.to_string()));
        }
        Ok(self)
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flat() {
            return write!(f, "{:+}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.keep {
            Keep::All => {}
            Keep::Lowest(n) => write!(f, "kl{}", n)?,
            Keep::Highest(n) => write!(f, "kh{}", n)?,
        }
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceExpr {
    type Err = AttritionError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (_, expr) = all_consuming(expression)
            .parse(text)
            .map_err(|_| AttritionError::InvalidDice(text.to_string()))?;
        expr.validate(text)
    }
}

fn number(input: &str) -> IResult<&str, i64> {
    map_res(digit1, |digits: &str| digits.parse::<i64>()).parse(input)
}

fn signed(input: &str) -> IResult<&str, i64> {
    alt((
        preceded(char('+'), number),
        map(preceded(char('-'), number), |n| -n),
    ))
    .parse(input)
}

fn keep(input: &str) -> IResult<&str, Keep> {
    alt((
        map(preceded(tag("kl"), decimal), Keep::Lowest),
        map(preceded(tag("kh"), decimal), Keep::Highest),
        map(preceded(char('k'), decimal), Keep::Highest),
    ))
    .parse(input)
}

fn dice(input: &str) -> IResult<&str, DiceExpr> {
    map(
        (opt(decimal), preceded(char('d'), decimal), opt(keep), opt(signed)),
        |(count, sides, keep, modifier)| DiceExpr {
            count: count.unwrap_or(1),
            sides,
            keep: keep.unwrap_or(Keep::All),
            modifier: modifier.unwrap_or(0),
        },
    )
    .parse(input)
}

fn flat(input: &str) -> IResult<&str, DiceExpr> {
    map(alt((signed, number)), DiceExpr::flat).parse(input)
}

fn expression(input: &str) -> IResult<&str, DiceExpr> {
    preceded(opt(char('+')), alt((dice, flat))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> DiceExpr {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_dice() {
        assert_eq!(parse("3d6"), DiceExpr::new(3, 6));
        assert_eq!(parse("d6"), DiceExpr::new(1, 6));
    }

    #[test]
    fn test_parse_keep_lowest() {
        assert_eq!(parse("3d6kl1"), DiceExpr::keep_lowest(3, 6));
        assert_eq!(parse("2d20kh1").keep, Keep::Highest(1));
        assert_eq!(parse("2d20k1").keep, Keep::Highest(1));
    }

    #[test]
    fn test_parse_overcharge_steps() {
        assert_eq!(parse("+1"), DiceExpr::flat(1));
        assert_eq!(parse("+1d3"), DiceExpr::new(1, 3));
        assert_eq!(parse("+1d6+4"), DiceExpr::new(1, 6).with_modifier(4));
        assert_eq!(parse("-2"), DiceExpr::flat(-2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "lots", "3d", "3d0", "3d6kl0", "1d6+", "2d6 extra"] {
            assert!(bad.parse::<DiceExpr>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_display_matches_notation() {
        for text in ["3d6kl1", "1d6+4", "+1", "1d3", "2d20kh1", "4d6-1"] {
            assert_eq!(parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_evaluate_keep_lowest() {
        let expr = DiceExpr::keep_lowest(3, 6);
        assert_eq!(expr.evaluate(&[5, 2, 4]), Some(2));
    }

    #[test]
    fn test_evaluate_rejects_impossible_faces() {
        let expr = DiceExpr::new(2, 6);
        assert_eq!(expr.evaluate(&[7, 1]), None);
        assert_eq!(expr.evaluate(&[3]), None);
        assert_eq!(expr.evaluate(&[0, 1]), None);
    }

    #[test]
    fn test_evaluate_flat() {
        assert_eq!(DiceExpr::flat(1).evaluate(&[]), Some(1));
    }

    #[test]
    fn test_evaluate_overflowing_modifier() {
        let expr: DiceExpr = "+1d6+9223372036854775807".parse().unwrap();
        assert_eq!(expr.evaluate(&[3]), None);
        assert_eq!(expr.evaluate(&[]), None);
    }
}
