//! Dice expressions for hit points
//!
//! Hit dice use the standard `NdS+M` notation ("2d8+6"). The modifier is
//! optional and may be negative; a roll never comes up below 1.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A parsed dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dice {
    count: u32,
    sides: u32,
    modifier: i32,
}

impl Dice {
    pub fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Dice {
            count,
            sides,
            modifier,
        }
    }

    /// Flat average, 5e style: floor of the mean, never below 1
    pub fn average(&self) -> u32 {
        let mean = (self.count * (self.sides + 1)) / 2;
        (mean as i64 + self.modifier as i64).max(1) as u32
    }

    /// Roll the expression
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let mut total: i64 = self.modifier as i64;
        for _ in 0..self.count {
            total += rng.gen_range(1..=self.sides) as i64;
        }
        total.max(1) as u32
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier.cmp(&0) {
            std::cmp::Ordering::Greater => write!(f, "+{}", self.modifier),
            std::cmp::Ordering::Less => write!(f, "{}", self.modifier),
            std::cmp::Ordering::Equal => Ok(()),
        }
    }
}

impl FromStr for Dice {
    type Err = CoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDice(text.to_string());

        let (dice_part, modifier) = if let Some(idx) = text.rfind(['+', '-']) {
            let modifier: i32 = text[idx..].parse().map_err(|_| invalid())?;
            (&text[..idx], modifier)
        } else {
            (text, 0)
        };

        let (count_part, sides_part) = dice_part.split_once('d').ok_or_else(invalid)?;
        let count: u32 = if count_part.is_empty() {
            1
        } else {
            count_part.parse().map_err(|_| invalid())?
        };
        let sides: u32 = sides_part.parse().map_err(|_| invalid())?;
        if count == 0 || sides == 0 {
            return Err(invalid());
        }

        Ok(Dice::new(count, sides, modifier))
    }
}

impl TryFrom<String> for Dice {
    type Error = CoreError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Dice> for String {
    fn from(dice: Dice) -> String {
        dice.to_string()
    }
}
