//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use hexforge_core::{Cr, Difficulty, DifficultySet, DifficultyTarget};
use serde_json::json;

fn parse(value: serde_json::Value) -> Result<EncounterRequestPayload, serde_json::Error> {
    serde_json::from_value(value)
}

#[test]
fn test_minimal_payload() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium"
    }))
    .unwrap();

    assert_eq!(payload.party_size, 4);
    assert_eq!(payload.party_level, 3);
    assert_eq!(
        payload.difficulty,
        DifficultyTarget::Tier(Difficulty::Medium)
    );
    assert!(payload.primary_enemy.is_none());
    assert!(payload.environment_type.is_none());
    assert!(payload.max_enemies.is_none());
    assert!(payload.minimum_cr.is_none());
    assert!(payload.roll_hp);
}

#[test]
fn test_difficulty_set_payload() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "random"
    }))
    .unwrap();

    assert_eq!(
        payload.difficulty,
        DifficultyTarget::Set(DifficultySet::Random)
    );
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    assert!(parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "brutal"
    }))
    .is_err());
}

#[test]
fn test_empty_strings_normalize_to_absent() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "primary_enemy": "",
        "environment_type": "",
        "max_enemies": "",
        "minimum_cr": ""
    }))
    .unwrap();

    assert!(payload.primary_enemy.is_none());
    assert!(payload.environment_type.is_none());
    assert!(payload.max_enemies.is_none());
    assert!(payload.minimum_cr.is_none());
}

#[test]
fn test_populated_optionals_survive() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "primary_enemy": "goblinoids",
        "max_enemies": 6,
        "minimum_cr": "1/4",
        "roll_hp": false
    }))
    .unwrap();

    assert_eq!(payload.primary_enemy.as_deref(), Some("goblinoids"));
    assert_eq!(payload.max_enemies, Some(6));
    assert_eq!(payload.minimum_cr, Some(Cr::QUARTER));
    assert!(!payload.roll_hp);
}

#[test]
fn test_max_enemies_accepts_numeric_string() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "max_enemies": "6"
    }))
    .unwrap();

    assert_eq!(payload.max_enemies, Some(6));
}

#[test]
fn test_max_enemies_rejects_garbage_string() {
    assert!(parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "max_enemies": "six"
    }))
    .is_err());
}

#[test]
fn test_minimum_cr_accepts_number() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "minimum_cr": 0.5
    }))
    .unwrap();

    assert_eq!(payload.minimum_cr, Some(Cr::HALF));
}

#[test]
fn test_minimum_cr_rejects_garbage_string() {
    assert!(parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "minimum_cr": "goblin"
    }))
    .is_err());
}

#[test]
fn test_validate_party_size() {
    let payload = parse(json!({
        "party_size": 0,
        "party_level": 3,
        "difficulty": "medium"
    }))
    .unwrap();

    assert!(payload.validate().is_err());
}

#[test]
fn test_validate_party_level_bounds() {
    for level in [0u8, 21] {
        let payload = parse(json!({
            "party_size": 4,
            "party_level": level,
            "difficulty": "medium"
        }))
        .unwrap();
        assert!(payload.validate().is_err(), "level {} accepted", level);
    }

    for level in [1u8, 20] {
        let payload = parse(json!({
            "party_size": 4,
            "party_level": level,
            "difficulty": "medium"
        }))
        .unwrap();
        assert!(payload.validate().is_ok(), "level {} rejected", level);
    }
}

#[test]
fn test_validate_zero_max_enemies() {
    let payload = parse(json!({
        "party_size": 4,
        "party_level": 3,
        "difficulty": "medium",
        "max_enemies": 0
    }))
    .unwrap();

    assert!(payload.validate().is_err());
}

#[test]
fn test_party_expansion() {
    let payload = parse(json!({
        "party_size": 3,
        "party_level": 7,
        "difficulty": "hard"
    }))
    .unwrap();

    assert_eq!(payload.party(), vec![7, 7, 7]);
}

#[test]
fn test_set_name_serialization() {
    let entry = SetName {
        value: "goblinoids".to_string(),
        name: "Goblinoids".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json, json!({"value": "goblinoids", "name": "Goblinoids"}));
}
