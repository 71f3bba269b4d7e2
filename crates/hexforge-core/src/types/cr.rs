//! Challenge rating values
//!
//! CR is a ladder, not a continuum: 0, 1/8, 1/4, 1/2, then whole numbers
//! up to 30. Values are stored in eighths so ordering is structural, and
//! off-ladder values are rejected at construction.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// A challenge rating on the 5e ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cr {
    eighths: u16,
}

impl Cr {
    pub const ZERO: Cr = Cr { eighths: 0 };
    pub const EIGHTH: Cr = Cr { eighths: 1 };
    pub const QUARTER: Cr = Cr { eighths: 2 };
    pub const HALF: Cr = Cr { eighths: 4 };
    pub const MAX: Cr = Cr { eighths: 240 };

    /// A whole-number rating, 1 through 30
    pub fn whole(rating: u16) -> Result<Cr> {
        if (1..=30).contains(&rating) {
            Ok(Cr { eighths: rating * 8 })
        } else {
            Err(CoreError::InvalidCr(rating.to_string()))
        }
    }

    /// Parse the wire form: "0", "1/8", "1/4", "1/2" or a whole number
    pub fn parse(text: &str) -> Result<Cr> {
        match text {
            "0" => Ok(Cr::ZERO),
            "1/8" => Ok(Cr::EIGHTH),
            "1/4" => Ok(Cr::QUARTER),
            "1/2" => Ok(Cr::HALF),
            other => other
                .parse::<u16>()
                .map_err(|_| CoreError::InvalidCr(other.to_string()))
                .and_then(Cr::whole),
        }
    }

    /// Accept the numeric wire form (0.125, 0.25, 0.5, whole numbers)
    pub fn from_f64(value: f64) -> Result<Cr> {
        let eighths = value * 8.0;
        if eighths.fract() != 0.0 || !(0.0..=240.0).contains(&eighths) {
            return Err(CoreError::InvalidCr(value.to_string()));
        }
        let eighths = eighths as u16;
        match eighths {
            0 | 1 | 2 | 4 => Ok(Cr { eighths }),
            n if n % 8 == 0 => Ok(Cr { eighths: n }),
            _ => Err(CoreError::InvalidCr(value.to_string())),
        }
    }

    /// XP value of a single monster of this rating (DMG table)
    pub fn xp(&self) -> u32 {
        match self.eighths {
            0 => 10,
            1 => 25,
            2 => 50,
            4 => 100,
            n => WHOLE_CR_XP[(n / 8) as usize - 1],
        }
    }
}

/// XP for whole-number CRs 1..=30
const WHOLE_CR_XP: [u32; 30] = [
    200, 450, 700, 1_100, 1_800, 2_300, 2_900, 3_900, 5_000, 5_900, 7_200, 8_400, 10_000, 11_500,
    13_000, 15_000, 18_000, 20_000, 22_000, 25_000, 33_000, 41_000, 50_000, 62_000, 75_000, 90_000,
    105_000, 120_000, 135_000, 155_000,
];

impl fmt::Display for Cr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.eighths {
            0 => f.write_str("0"),
            1 => f.write_str("1/8"),
            2 => f.write_str("1/4"),
            4 => f.write_str("1/2"),
            n => write!(f, "{}", n / 8),
        }
    }
}

impl Serialize for Cr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Cr, D::Error> {
        deserializer.deserialize_any(CrVisitor)
    }
}

struct CrVisitor;

impl<'de> Visitor<'de> for CrVisitor {
    type Value = Cr;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a challenge rating such as \"1/4\" or 5")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Cr, E> {
        Cr::parse(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Cr, E> {
        Cr::from_f64(value as f64).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Cr, E> {
        Cr::from_f64(value as f64).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Cr, E> {
        Cr::from_f64(value).map_err(E::custom)
    }
}
