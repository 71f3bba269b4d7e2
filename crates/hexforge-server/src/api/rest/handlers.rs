//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use axum::{extract::State, Json};
use tracing::info;

use hexforge_generator::Catalog;

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ApiError;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn set_names(catalog: &Catalog) -> Vec<SetName> {
    let mut names: Vec<SetName> = catalog
        .iter()
        .map(|(key, set)| SetName {
            value: key.to_string(),
            name: set.name.clone(),
        })
        .collect();
    names.sort_by(|a, b| a.name.cmp(&b.name));
    names
}

/// Mob-set listing endpoint
pub(super) async fn mob_set_names(State(state): State<AppState>) -> Json<Vec<SetName>> {
    Json(set_names(state.generator.mob_sets()))
}

/// Environment-set listing endpoint
pub(super) async fn environment_set_names(State(state): State<AppState>) -> Json<Vec<SetName>> {
    Json(set_names(state.generator.environment_sets()))
}

/// Encounter generation endpoint
#[axum::debug_handler]
pub(super) async fn encounter(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EncounterRequestPayload>,
) -> Result<Json<String>, ApiError> {
    payload.validate()?;

    if payload.primary_enemy.is_none() && payload.environment_type.is_none() {
        return Err(ApiError::MissingSelector);
    }

    info!(
        "Generating encounter for {} character(s) of level {}",
        payload.party_size, payload.party_level
    );

    let party = payload.party();
    let generated = state.generator.hex_encounter(
        payload.difficulty,
        &party,
        payload.primary_enemy.as_deref(),
        payload.environment_type.as_deref(),
        payload.max_enemies,
        payload.minimum_cr,
    )?;

    let html = generated
        .encounter
        .html_with_links(payload.roll_hp, &mut rand::thread_rng());
    let body = format!(
        "<h3>{} {}</h3>\n{}",
        capitalize(generated.difficulty.label()),
        capitalize(&generated.mob_type),
        html
    );

    Ok(Json(body))
}

/// First character uppercase, the rest lowercase
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
