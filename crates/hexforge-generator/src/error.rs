//! Generator error types

use thiserror::Error;

/// Generator error type
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No valid, unique monster grouping satisfies the constraints
    #[error("no valid unique monster grouping satisfies the constraints")]
    NoUniqueGroup,

    /// Unknown mob set key
    #[error("unknown mob set: {0}")]
    UnknownMobSet(String),

    /// Unknown environment set key
    #[error("unknown environment set: {0}")]
    UnknownEnvironment(String),

    /// Neither a primary enemy nor an environment was supplied
    #[error("either a primary enemy or an environment is required")]
    NoPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
