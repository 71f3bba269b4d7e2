//! Builtin monster roster
//!
//! Every monster referenced by a mob set or an environment set is defined
//! here exactly once, keyed by slug. Hit dice follow the published
//! statblocks; reference links point at the open5e entry for the slug.

use std::collections::BTreeMap;

use hexforge_core::{Cr, Monster};

fn entry(key: &str, name: &str, cr: &str, hit_dice: &str) -> Monster {
    Monster::new(
        key,
        name,
        Cr::parse(cr).expect("builtin bestiary CR"),
        hit_dice.parse().expect("builtin bestiary hit dice"),
        &format!("https://open5e.com/monsters/{}", key),
    )
}

/// The full builtin roster, keyed by slug
pub fn builtin() -> BTreeMap<String, Monster> {
    let roster = [
        // Goblinoids
        entry("goblin", "Goblin", "1/4", "2d6"),
        entry("goblin-boss", "Goblin Boss", "1", "6d6"),
        entry("hobgoblin", "Hobgoblin", "1/2", "2d8+2"),
        entry("hobgoblin-captain", "Hobgoblin Captain", "3", "6d8+12"),
        entry("bugbear", "Bugbear", "1", "5d8+5"),
        entry("bugbear-chief", "Bugbear Chief", "3", "10d8+10"),
        entry("worg", "Worg", "1/2", "4d10+4"),
        // Kobolds
        entry("kobold", "Kobold", "1/8", "2d6-2"),
        entry("winged-kobold", "Winged Kobold", "1/4", "3d6-3"),
        entry("giant-lizard", "Giant Lizard", "1/4", "3d10+3"),
        // Undead
        entry("skeleton", "Skeleton", "1/4", "2d8+4"),
        entry("zombie", "Zombie", "1/4", "3d8+9"),
        entry("ghoul", "Ghoul", "1", "5d8"),
        entry("ghast", "Ghast", "2", "8d8"),
        entry("shadow", "Shadow", "1/2", "3d8+3"),
        entry("specter", "Specter", "1", "5d8"),
        entry("wight", "Wight", "3", "6d8+18"),
        entry("mummy", "Mummy", "3", "9d8+18"),
        entry("wraith", "Wraith", "5", "9d8+27"),
        entry("vampire-spawn", "Vampire Spawn", "5", "11d8+33"),
        // Orcs
        entry("orc", "Orc", "1/2", "2d8+6"),
        entry("orog", "Orog", "2", "6d8+18"),
        entry("orc-eye-of-gruumsh", "Orc Eye of Gruumsh", "2", "6d8+18"),
        entry("orc-war-chief", "Orc War Chief", "4", "11d8+44"),
        // Bandits
        entry("bandit", "Bandit", "1/8", "2d8+2"),
        entry("thug", "Thug", "1/2", "5d8+10"),
        entry("bandit-captain", "Bandit Captain", "2", "10d8+20"),
        entry("spy", "Spy", "1", "6d8"),
        entry("assassin", "Assassin", "8", "12d8+24"),
        // Giants
        entry("ogre", "Ogre", "2", "7d10+21"),
        entry("ettin", "Ettin", "4", "10d10+30"),
        entry("troll", "Troll", "5", "8d10+40"),
        entry("hill-giant", "Hill Giant", "5", "10d12+40"),
        entry("stone-giant", "Stone Giant", "7", "11d12+55"),
        entry("frost-giant", "Frost Giant", "8", "12d12+60"),
        entry("fire-giant", "Fire Giant", "9", "13d12+78"),
        // Cultists
        entry("cultist", "Cultist", "1/8", "2d8"),
        entry("cult-fanatic", "Cult Fanatic", "2", "6d8+6"),
        entry("acolyte", "Acolyte", "1/4", "2d8"),
        entry("priest", "Priest", "2", "5d8+5"),
        entry("veteran", "Veteran", "3", "9d8+18"),
        // Gnolls
        entry("gnoll", "Gnoll", "1/2", "5d8"),
        entry("gnoll-pack-lord", "Gnoll Pack Lord", "2", "9d8+9"),
        entry("hyena", "Hyena", "0", "1d8+1"),
        entry("giant-hyena", "Giant Hyena", "1", "6d10+12"),
        // Wilderness
        entry("wolf", "Wolf", "1/4", "2d8+2"),
        entry("dire-wolf", "Dire Wolf", "1", "5d10+10"),
        entry("giant-spider", "Giant Spider", "1", "4d10+4"),
        entry("owlbear", "Owlbear", "3", "7d10+21"),
        entry("winter-wolf", "Winter Wolf", "3", "10d10+20"),
        entry("polar-bear", "Polar Bear", "2", "5d10+15"),
        entry("ice-mephit", "Ice Mephit", "1/2", "6d6"),
        entry("yeti", "Yeti", "3", "8d10+16"),
        entry("mammoth", "Mammoth", "6", "11d12+55"),
        entry("jackal", "Jackal", "0", "1d6"),
        entry("giant-scorpion", "Giant Scorpion", "3", "7d10+14"),
        entry("dust-mephit", "Dust Mephit", "1/2", "5d6"),
        entry("air-elemental", "Air Elemental", "5", "12d10+24"),
        entry("lizardfolk", "Lizardfolk", "1/2", "4d8+4"),
        entry("giant-frog", "Giant Frog", "1/4", "4d8"),
        entry("crocodile", "Crocodile", "1/2", "3d10+3"),
        entry("giant-crocodile", "Giant Crocodile", "5", "9d12+27"),
        entry("giant-constrictor-snake", "Giant Constrictor Snake", "2", "8d12+8"),
        entry("shambling-mound", "Shambling Mound", "5", "16d8+16"),
        entry("will-o-wisp", "Will-o'-Wisp", "2", "9d4"),
        entry("giant-eagle", "Giant Eagle", "1", "4d10+4"),
        entry("griffon", "Griffon", "2", "7d10+21"),
        entry("harpy", "Harpy", "1", "7d8+7"),
        entry("wyvern", "Wyvern", "6", "13d10+39"),
        entry("grick", "Grick", "2", "6d8"),
        entry("gray-ooze", "Gray Ooze", "1/2", "3d8+9"),
        entry("gelatinous-cube", "Gelatinous Cube", "2", "8d10+40"),
        entry("ochre-jelly", "Ochre Jelly", "2", "6d10+12"),
        entry("minotaur", "Minotaur", "3", "9d10+27"),
        entry("roper", "Roper", "5", "11d8+44"),
        entry("drow", "Drow", "1/4", "3d8"),
    ];

    roster
        .into_iter()
        .map(|monster| (monster.key.clone(), monster))
        .collect()
}
