//! Server error types
//!
//! Every expected failure is mapped to a structured `{detail: ...}` JSON
//! response here. The two domain-specific failures use the same
//! non-standard status codes and remediation hints the frontend already
//! understands: 460 when no enemy/environment selector was supplied, 461
//! when the engine cannot satisfy the constraints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use hexforge_generator::GeneratorError;

/// Domain precondition failure: no selector supplied
const MISSING_SELECTOR_STATUS: u16 = 460;

/// Constraint-infeasibility failure from the engine
const INFEASIBLE_STATUS: u16 = 461;

pub const MISSING_SELECTOR_DETAIL: &str =
    "You must select either an environment or primary enemy.";

pub const INFEASIBLE_DETAIL: &str = "The constraints were too tight. Try increasing the max \
     enemies, reducing the minimum cr, or choosing a different enemy set.";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Structurally invalid input
    Validation(String),

    /// Neither primary_enemy nor environment_type supplied
    MissingSelector,

    /// No valid, unique monster grouping satisfies the request
    Infeasible,

    /// Unexpected server fault
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::MissingSelector => write!(f, "{}", MISSING_SELECTOR_DETAIL),
            ApiError::Infeasible => write!(f, "{}", INFEASIBLE_DETAIL),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::MissingSelector => (
                status(MISSING_SELECTOR_STATUS),
                MISSING_SELECTOR_DETAIL.to_string(),
            ),
            ApiError::Infeasible => (status(INFEASIBLE_STATUS), INFEASIBLE_DETAIL.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}

impl From<GeneratorError> for ApiError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::NoUniqueGroup => ApiError::Infeasible,
            GeneratorError::NoPool => ApiError::MissingSelector,
            GeneratorError::UnknownMobSet(key) => {
                ApiError::Validation(format!("Unknown mob set: {}", key))
            }
            GeneratorError::UnknownEnvironment(key) => {
                ApiError::Validation(format!("Unknown environment set: {}", key))
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ApiError::Validation("party_size must be at least 1".to_string());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("party_size"));
    }

    #[test]
    fn test_missing_selector_display_matches_detail() {
        let err = ApiError::MissingSelector;
        assert_eq!(err.to_string(), MISSING_SELECTOR_DETAIL);
    }

    #[test]
    fn test_into_response_validation() {
        let response = ApiError::Validation("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_response_missing_selector() {
        let response = ApiError::MissingSelector.into_response();
        assert_eq!(response.status().as_u16(), 460);
    }

    #[test]
    fn test_into_response_infeasible() {
        let response = ApiError::Infeasible.into_response();
        assert_eq!(response.status().as_u16(), 461);
    }

    #[test]
    fn test_into_response_internal() {
        let response = ApiError::Internal("crash".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_no_unique_group_maps_to_infeasible() {
        let err: ApiError = GeneratorError::NoUniqueGroup.into();
        assert!(matches!(err, ApiError::Infeasible));
    }

    #[test]
    fn test_unknown_keys_map_to_validation() {
        let err: ApiError = GeneratorError::UnknownMobSet("dragons".to_string()).into();
        match err {
            ApiError::Validation(msg) => assert!(msg.contains("dragons")),
            _ => panic!("Expected validation error"),
        }

        let err: ApiError = GeneratorError::UnknownEnvironment("moon".to_string()).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_no_pool_maps_to_missing_selector() {
        let err: ApiError = GeneratorError::NoPool.into();
        assert!(matches!(err, ApiError::MissingSelector));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ApiError = anyhow::anyhow!("something went wrong").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
