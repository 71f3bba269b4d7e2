//! The encounter generator
//!
//! `hex_encounter` enumerates every distinct monster grouping (one or two
//! kinds, counts capped by `max_enemies`) whose adjusted XP lands in an
//! allowed tier band, then picks one uniformly at random. Feasibility is
//! deterministic for a given request; only the pick among feasible
//! groupings varies.

use rand::Rng;
use tracing::debug;

use hexforge_core::{Cr, Difficulty, DifficultyTarget, Monster};

use crate::budget;
use crate::catalog::{self, Catalog, MonsterSet};
use crate::encounter::{Encounter, EncounterGroup};
use crate::error::{GeneratorError, Result};

/// Opposition cap when the request does not supply one
const DEFAULT_MAX_ENEMIES: u32 = 10;

/// The generation engine: both catalogs plus the selection logic
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    mob_sets: Catalog,
    environments: Catalog,
}

/// The output of a successful generation
#[derive(Debug, Clone)]
pub struct GeneratedEncounter {
    pub encounter: Encounter,

    /// The concrete tier the grouping landed on
    pub difficulty: Difficulty,

    /// The key of the pool the grouping was drawn from
    pub mob_type: String,
}

impl EncounterGenerator {
    /// An engine over the builtin catalogs
    pub fn new() -> Self {
        EncounterGenerator {
            mob_sets: catalog::mob_sets(),
            environments: catalog::environment_sets(),
        }
    }

    /// An engine over caller-supplied catalogs
    pub fn with_catalogs(mob_sets: Catalog, environments: Catalog) -> Self {
        EncounterGenerator {
            mob_sets,
            environments,
        }
    }

    pub fn mob_sets(&self) -> &Catalog {
        &self.mob_sets
    }

    pub fn environment_sets(&self) -> &Catalog {
        &self.environments
    }

    /// Generate an encounter using the thread-local RNG
    #[allow(clippy::too_many_arguments)]
    pub fn hex_encounter(
        &self,
        difficulty: DifficultyTarget,
        party: &[u8],
        primary_enemy: Option<&str>,
        environment_type: Option<&str>,
        max_enemies: Option<u32>,
        minimum_cr: Option<Cr>,
    ) -> Result<GeneratedEncounter> {
        self.hex_encounter_with_rng(
            difficulty,
            party,
            primary_enemy,
            environment_type,
            max_enemies,
            minimum_cr,
            &mut rand::thread_rng(),
        )
    }

    /// Generate an encounter with a caller-supplied RNG
    #[allow(clippy::too_many_arguments)]
    pub fn hex_encounter_with_rng<R: Rng + ?Sized>(
        &self,
        difficulty: DifficultyTarget,
        party: &[u8],
        primary_enemy: Option<&str>,
        environment_type: Option<&str>,
        max_enemies: Option<u32>,
        minimum_cr: Option<Cr>,
        rng: &mut R,
    ) -> Result<GeneratedEncounter> {
        let (mob_type, pool) = self.resolve_pool(primary_enemy, environment_type)?;
        let cap = max_enemies.unwrap_or(DEFAULT_MAX_ENEMIES).max(1);

        let candidates: Vec<&Monster> = pool
            .monsters
            .iter()
            .filter(|monster| minimum_cr.map_or(true, |floor| monster.cr >= floor))
            .collect();

        let feasible = feasible_groupings(&candidates, party, difficulty, cap);
        debug!(
            "pool {}: {} candidates, {} feasible groupings",
            mob_type,
            candidates.len(),
            feasible.len()
        );

        if feasible.is_empty() {
            return Err(GeneratorError::NoUniqueGroup);
        }

        let (tier, composition) = &feasible[rng.gen_range(0..feasible.len())];
        let groups = composition
            .iter()
            .map(|&(index, count)| EncounterGroup {
                monster: candidates[index].clone(),
                count,
            })
            .collect();

        Ok(GeneratedEncounter {
            encounter: Encounter::new(groups),
            difficulty: *tier,
            mob_type,
        })
    }

    /// Resolve the monster pool. A primary enemy takes precedence over an
    /// environment when both are present.
    fn resolve_pool(
        &self,
        primary_enemy: Option<&str>,
        environment_type: Option<&str>,
    ) -> Result<(String, &MonsterSet)> {
        if let Some(key) = primary_enemy {
            let set = self
                .mob_sets
                .get(key)
                .ok_or_else(|| GeneratorError::UnknownMobSet(key.to_string()))?;
            return Ok((key.to_string(), set));
        }
        if let Some(key) = environment_type {
            let set = self
                .environments
                .get(key)
                .ok_or_else(|| GeneratorError::UnknownEnvironment(key.to_string()))?;
            return Ok((key.to_string(), set));
        }
        Err(GeneratorError::NoPool)
    }
}

impl Default for EncounterGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Every distinct one- or two-kind composition whose adjusted XP lands in
/// an allowed tier band. Tier bands are disjoint, so each composition
/// appears at most once.
fn feasible_groupings(
    candidates: &[&Monster],
    party: &[u8],
    difficulty: DifficultyTarget,
    cap: u32,
) -> Vec<(Difficulty, Vec<(usize, u32)>)> {
    let party_size = party.len();
    let mut feasible = Vec::new();

    let mut consider = |composition: Vec<(usize, u32)>| {
        let total_xp: u32 = composition
            .iter()
            .map(|&(index, count)| candidates[index].xp() * count)
            .sum();
        let monsters: u32 = composition.iter().map(|&(_, count)| count).sum();
        let adjusted = budget::adjusted_xp(total_xp, monsters, party_size);
        for &tier in difficulty.tiers() {
            if budget::band_contains(party, tier, adjusted) {
                feasible.push((tier, composition));
                return;
            }
        }
    };

    for index in 0..candidates.len() {
        for count in 1..=cap {
            consider(vec![(index, count)]);
        }
    }

    for first in 0..candidates.len() {
        for second in (first + 1)..candidates.len() {
            for first_count in 1..cap {
                for second_count in 1..=(cap - first_count) {
                    consider(vec![(first, first_count), (second, second_count)]);
                }
            }
        }
    }

    feasible
}
