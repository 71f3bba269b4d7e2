//! Generated encounters and their HTML rendering

use rand::Rng;
use serde::Serialize;

use hexforge_core::Monster;

use crate::budget;

/// One kind of monster and how many of it
#[derive(Debug, Clone, Serialize)]
pub struct EncounterGroup {
    pub monster: Monster,
    pub count: u32,
}

/// A concrete monster grouping selected by the engine
#[derive(Debug, Clone, Serialize)]
pub struct Encounter {
    pub groups: Vec<EncounterGroup>,
}

impl Encounter {
    pub fn new(mut groups: Vec<EncounterGroup>) -> Self {
        // Toughest kind first in the rendered output
        groups.sort_by(|a, b| b.monster.cr.cmp(&a.monster.cr));
        Encounter { groups }
    }

    pub fn total_monsters(&self) -> u32 {
        self.groups.iter().map(|group| group.count).sum()
    }

    pub fn total_xp(&self) -> u32 {
        self.groups
            .iter()
            .map(|group| group.monster.xp() * group.count)
            .sum()
    }

    /// Raw XP adjusted for opposition size against the given party
    pub fn adjusted_xp(&self, party_size: usize) -> u32 {
        budget::adjusted_xp(self.total_xp(), self.total_monsters(), party_size)
    }

    /// Render the encounter as an HTML fragment with reference links.
    ///
    /// One paragraph per monster kind; hit points are rolled per creature
    /// when `roll_hp` is set, otherwise the flat statblock average is
    /// repeated.
    pub fn html_with_links<R: Rng + ?Sized>(&self, roll_hp: bool, rng: &mut R) -> String {
        let mut html = String::new();
        for group in &self.groups {
            let hp: Vec<String> = (0..group.count)
                .map(|_| {
                    if roll_hp {
                        group.monster.roll_hp(rng).to_string()
                    } else {
                        group.monster.average_hp().to_string()
                    }
                })
                .collect();
            html.push_str(&format!(
                "<p>{} x <a href=\"{}\">{}</a> (CR {}, HP: {})</p>\n",
                group.count,
                group.monster.url,
                group.monster.name,
                group.monster.cr,
                hp.join(", ")
            ));
        }
        html
    }
}
