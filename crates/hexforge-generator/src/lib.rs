//! HEXFORGE Generator - Encounter generation engine
//!
//! Owns the builtin monster catalogs and the `hex_encounter` operation:
//! given a party, a difficulty target and pool constraints, select a
//! random monster grouping whose adjusted XP lands in the target band.

pub mod bestiary;
pub mod budget;
pub mod catalog;
pub mod encounter;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use catalog::{Catalog, MonsterSet};
pub use encounter::{Encounter, EncounterGroup};
pub use engine::{EncounterGenerator, GeneratedEncounter};
pub use error::GeneratorError;
