//! Mob-set and environment-set catalogs
//!
//! Both catalogs share one shape: a read-only map from set key to a named
//! collection of monsters. They are built once at startup and never
//! mutated afterwards, so any number of in-flight requests can read them
//! concurrently.

use std::collections::BTreeMap;

use serde::Serialize;

use hexforge_core::Monster;

use crate::bestiary;

/// A curated, named collection of monsters
#[derive(Debug, Clone, Serialize)]
pub struct MonsterSet {
    /// Display name, used by the listing endpoints
    pub name: String,

    /// Member monsters
    pub monsters: Vec<Monster>,
}

/// A read-only catalog of monster sets, keyed by slug
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    sets: BTreeMap<String, MonsterSet>,
}

impl Catalog {
    fn from_entries(entries: &[(&str, &str, &[&str])]) -> Catalog {
        let roster = bestiary::builtin();
        let sets = entries
            .iter()
            .map(|(key, name, members)| {
                let monsters = members
                    .iter()
                    .map(|slug| {
                        roster
                            .get(*slug)
                            .unwrap_or_else(|| panic!("builtin set {} references unknown monster {}", key, slug))
                            .clone()
                    })
                    .collect();
                (
                    key.to_string(),
                    MonsterSet {
                        name: name.to_string(),
                        monsters,
                    },
                )
            })
            .collect();
        Catalog { sets }
    }

    pub fn get(&self, key: &str) -> Option<&MonsterSet> {
        self.sets.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonsterSet)> {
        self.sets.iter().map(|(key, set)| (key.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// The builtin mob-set catalog
pub fn mob_sets() -> Catalog {
    Catalog::from_entries(&[
        (
            "goblinoids",
            "Goblinoids",
            &[
                "goblin",
                "goblin-boss",
                "hobgoblin",
                "hobgoblin-captain",
                "bugbear",
                "bugbear-chief",
                "worg",
            ],
        ),
        (
            "kobolds",
            "Kobolds",
            &["kobold", "winged-kobold", "giant-lizard"],
        ),
        (
            "undead",
            "Undead",
            &[
                "skeleton",
                "zombie",
                "ghoul",
                "ghast",
                "shadow",
                "specter",
                "wight",
                "mummy",
                "wraith",
                "vampire-spawn",
            ],
        ),
        (
            "orcs",
            "Orcs",
            &["orc", "orog", "orc-eye-of-gruumsh", "orc-war-chief"],
        ),
        (
            "bandits",
            "Bandits",
            &["bandit", "thug", "bandit-captain", "spy", "assassin"],
        ),
        (
            "giants",
            "Giants",
            &[
                "ogre",
                "ettin",
                "troll",
                "hill-giant",
                "stone-giant",
                "frost-giant",
                "fire-giant",
            ],
        ),
        (
            "cultists",
            "Cultists",
            &["cultist", "cult-fanatic", "acolyte", "priest", "veteran"],
        ),
        (
            "gnolls",
            "Gnoll Packs",
            &["gnoll", "gnoll-pack-lord", "hyena", "giant-hyena"],
        ),
    ])
}

/// The builtin environment-set catalog
pub fn environment_sets() -> Catalog {
    Catalog::from_entries(&[
        (
            "forest",
            "Forest",
            &[
                "wolf",
                "dire-wolf",
                "giant-spider",
                "owlbear",
                "goblin",
                "hobgoblin",
                "gnoll",
            ],
        ),
        (
            "arctic",
            "Arctic",
            &[
                "wolf",
                "winter-wolf",
                "polar-bear",
                "ice-mephit",
                "yeti",
                "mammoth",
                "frost-giant",
            ],
        ),
        (
            "desert",
            "Desert",
            &[
                "jackal",
                "hyena",
                "giant-hyena",
                "giant-scorpion",
                "dust-mephit",
                "mummy",
                "air-elemental",
            ],
        ),
        (
            "swamp",
            "Swamp",
            &[
                "lizardfolk",
                "giant-frog",
                "crocodile",
                "giant-crocodile",
                "giant-constrictor-snake",
                "shambling-mound",
                "will-o-wisp",
            ],
        ),
        (
            "mountain",
            "Mountains",
            &[
                "giant-eagle",
                "griffon",
                "harpy",
                "ogre",
                "hill-giant",
                "stone-giant",
                "wyvern",
            ],
        ),
        (
            "underdark",
            "Underdark",
            &[
                "drow",
                "grick",
                "gray-ooze",
                "gelatinous-cube",
                "ochre-jelly",
                "minotaur",
                "roper",
            ],
        ),
    ])
}
