//! HEXFORGE Core - Core types and definitions for the HEXFORGE encounter engine
//!
//! This crate provides the fundamental types used across the HEXFORGE ecosystem:
//! - Difficulty tiers and named tier sets
//! - Challenge rating (CR) values
//! - Dice expressions for hit points
//! - Monster definitions
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{Cr, Dice, Difficulty, DifficultySet, DifficultyTarget, Monster};
