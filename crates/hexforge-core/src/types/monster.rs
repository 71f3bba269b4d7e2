//! Monster definitions

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cr::Cr;
use super::dice::Dice;

/// A monster entry as stored in the catalogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Stable slug used as the catalog key and in reference URLs
    pub key: String,

    /// Display name
    pub name: String,

    /// Challenge rating
    pub cr: Cr,

    /// Hit dice expression
    pub hit_dice: Dice,

    /// Reference page for rendered links
    pub url: String,
}

impl Monster {
    pub fn new(key: &str, name: &str, cr: Cr, hit_dice: Dice, url: &str) -> Self {
        Monster {
            key: key.to_string(),
            name: name.to_string(),
            cr,
            hit_dice,
            url: url.to_string(),
        }
    }

    /// Flat statblock hit points
    pub fn average_hp(&self) -> u32 {
        self.hit_dice.average()
    }

    /// Rolled hit points
    pub fn roll_hp<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.hit_dice.roll(rng)
    }

    /// XP awarded for defeating this monster
    pub fn xp(&self) -> u32 {
        self.cr.xp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Monster {
        Monster::new(
            "goblin",
            "Goblin",
            Cr::QUARTER,
            "2d6".parse().unwrap(),
            "https://open5e.com/monsters/goblin",
        )
    }

    #[test]
    fn test_average_hp() {
        assert_eq!(goblin().average_hp(), 7);
    }

    #[test]
    fn test_xp_follows_cr() {
        assert_eq!(goblin().xp(), 50);
    }

    #[test]
    fn test_serde_round_trip() {
        let monster = goblin();
        let json = serde_json::to_string(&monster).unwrap();
        let back: Monster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, monster);
    }
}
