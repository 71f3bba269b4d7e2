//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hexforge_core::{Cr, DifficultyTarget};
use hexforge_generator::EncounterGenerator;

use super::normalize;
use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<EncounterGenerator>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One listing entry: the set key plus its display name
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SetName {
    pub value: String,
    pub name: String,
}

/// Encounter request payload
#[derive(Debug, Deserialize)]
pub struct EncounterRequestPayload {
    /// Number of characters in the party (at least 1)
    pub party_size: u32,

    /// Character level, 1 through 20
    pub party_level: u8,

    /// A single tier or a named tier set
    pub difficulty: DifficultyTarget,

    /// Mob-set key; empty string means absent
    #[serde(default, deserialize_with = "normalize::empty_string_as_none")]
    pub primary_enemy: Option<String>,

    /// Environment-set key; empty string means absent
    #[serde(default, deserialize_with = "normalize::empty_string_as_none")]
    pub environment_type: Option<String>,

    /// Opposition cap; empty string means absent
    #[serde(default, deserialize_with = "normalize::empty_as_none_u32")]
    pub max_enemies: Option<u32>,

    /// CR floor for the pool; empty string means absent
    #[serde(default, deserialize_with = "normalize::empty_as_none_cr")]
    pub minimum_cr: Option<Cr>,

    /// Roll hit points per creature instead of using the flat average
    #[serde(default = "default_roll_hp")]
    pub roll_hp: bool,
}

fn default_roll_hp() -> bool {
    true
}

impl EncounterRequestPayload {
    /// Range checks the JSON types cannot express. Runs before anything
    /// reaches the engine.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.party_size < 1 {
            return Err(ApiError::Validation(
                "party_size must be at least 1".to_string(),
            ));
        }
        if !(1..=20).contains(&self.party_level) {
            return Err(ApiError::Validation(
                "party_level must be between 1 and 20".to_string(),
            ));
        }
        if self.max_enemies == Some(0) {
            return Err(ApiError::Validation(
                "max_enemies must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The engine's party representation: the level repeated once per
    /// character
    pub fn party(&self) -> Vec<u8> {
        vec![self.party_level; self.party_size as usize]
    }
}
