//! Error types for HEXFORGE Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid challenge rating: {0}")]
    InvalidCr(String),

    #[error("Invalid dice expression: {0}")]
    InvalidDice(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
