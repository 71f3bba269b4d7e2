//! Encounter difficulty tiers and named tier sets
//!
//! A request targets either a single tier ("medium") or a named set of
//! tiers ("random"); `DifficultyTarget` is the discriminated union of the
//! two. On the wire both are plain lowercase strings, so deserialization
//! tries tier names first and set names second.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single encounter difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Deadly,
    ];

    /// Lowercase wire label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Deadly => "deadly",
        }
    }

    /// The next tier up, if any
    pub fn next(&self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => Some(Difficulty::Deadly),
            Difficulty::Deadly => None,
        }
    }

    /// Parse a lowercase tier label
    pub fn parse(label: &str) -> Result<Difficulty> {
        match label {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "deadly" => Ok(Difficulty::Deadly),
            other => Err(CoreError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named group of difficulty tiers
///
/// A request targeting a set is satisfied by any tier within the group;
/// the engine picks the concrete tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultySet {
    /// Any of the four tiers
    Random,
    /// Easy, medium or hard
    NotDeadly,
    /// Hard or deadly
    Challenging,
}

impl DifficultySet {
    /// The tiers this set is satisfied by
    pub fn tiers(&self) -> &'static [Difficulty] {
        match self {
            DifficultySet::Random => &Difficulty::ALL,
            DifficultySet::NotDeadly => &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
            DifficultySet::Challenging => &[Difficulty::Hard, Difficulty::Deadly],
        }
    }

    /// Lowercase wire label
    pub fn label(&self) -> &'static str {
        match self {
            DifficultySet::Random => "random",
            DifficultySet::NotDeadly => "not_deadly",
            DifficultySet::Challenging => "challenging",
        }
    }
}

impl std::fmt::Display for DifficultySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Either a single tier or a named set of tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DifficultyTarget {
    Tier(Difficulty),
    Set(DifficultySet),
}

impl DifficultyTarget {
    /// The tiers a generated encounter may land on
    pub fn tiers(&self) -> &'static [Difficulty] {
        match self {
            DifficultyTarget::Tier(Difficulty::Easy) => &[Difficulty::Easy],
            DifficultyTarget::Tier(Difficulty::Medium) => &[Difficulty::Medium],
            DifficultyTarget::Tier(Difficulty::Hard) => &[Difficulty::Hard],
            DifficultyTarget::Tier(Difficulty::Deadly) => &[Difficulty::Deadly],
            DifficultyTarget::Set(set) => set.tiers(),
        }
    }
}

impl From<Difficulty> for DifficultyTarget {
    fn from(tier: Difficulty) -> Self {
        DifficultyTarget::Tier(tier)
    }
}

impl From<DifficultySet> for DifficultyTarget {
    fn from(set: DifficultySet) -> Self {
        DifficultyTarget::Set(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_form() {
        let tier: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(tier, Difficulty::Medium);
        assert_eq!(serde_json::to_string(&Difficulty::Deadly).unwrap(), "\"deadly\"");
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Hard < Difficulty::Deadly);
    }

    #[test]
    fn test_difficulty_next() {
        assert_eq!(Difficulty::Easy.next(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::Deadly.next(), None);
    }

    #[test]
    fn test_difficulty_parse_rejects_unknown() {
        assert!(Difficulty::parse("brutal").is_err());
    }

    #[test]
    fn test_set_tiers() {
        assert_eq!(DifficultySet::Random.tiers().len(), 4);
        assert_eq!(
            DifficultySet::Challenging.tiers(),
            &[Difficulty::Hard, Difficulty::Deadly]
        );
        assert!(!DifficultySet::NotDeadly.tiers().contains(&Difficulty::Deadly));
    }

    #[test]
    fn test_target_prefers_tier_over_set() {
        let target: DifficultyTarget = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(target, DifficultyTarget::Tier(Difficulty::Hard));

        let target: DifficultyTarget = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(target, DifficultyTarget::Set(DifficultySet::Random));
    }

    #[test]
    fn test_target_rejects_unknown_label() {
        let result: std::result::Result<DifficultyTarget, _> = serde_json::from_str("\"impossible\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_target_tiers_single() {
        let target = DifficultyTarget::Tier(Difficulty::Medium);
        assert_eq!(target.tiers(), &[Difficulty::Medium]);
    }
}
