//! Response types for the pay stub engine API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AggregateResult;

/// Successful `/preview` response.
///
/// The engine result is flattened into the envelope, so `totals`, `periods`
/// and `absence_plans` sit alongside the identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the preview was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the figures.
    pub engine_version: String,
    /// The computed pay stubs.
    #[serde(flatten)]
    pub result: AggregateResult,
}

impl PreviewResponse {
    /// Wraps an engine result with a fresh id and timestamp.
    pub fn new(result: AggregateResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "The schedule must end on or after its start and cover a bounded number of periods",
                ),
            },
            EngineError::InvalidConfiguration { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_CONFIGURATION", message),
            },
            EngineError::UnknownJurisdiction { state } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_JURISDICTION",
                    message,
                    format!("No tax table is loaded for state '{}'", state),
                ),
            },
            EngineError::MalformedLineItem { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MALFORMED_LINE_ITEM", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_input_errors_are_bad_request() {
        let cases = vec![
            (
                EngineError::InvalidRange {
                    start: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                    end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    message: "end is before start".to_string(),
                },
                "INVALID_RANGE",
            ),
            (
                EngineError::invalid_configuration("rate", "is required"),
                "INVALID_CONFIGURATION",
            ),
            (
                EngineError::UnknownJurisdiction {
                    state: "ZZ".to_string(),
                },
                "UNKNOWN_JURISDICTION",
            ),
            (
                EngineError::malformed_line_item("Gym", "unknown deduction type 'gym'"),
                "MALFORMED_LINE_ITEM",
            ),
        ];

        for (engine_error, code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.error.code, code);
        }
    }

    #[test]
    fn test_error_response_carries_status_and_body() {
        let response = ApiErrorResponse::from(EngineError::UnknownJurisdiction {
            state: "ZZ".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "federal.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_preview_response_flattens_result() {
        let response = PreviewResponse::new(AggregateResult {
            totals: Default::default(),
            periods: vec![],
            absence_plans: vec![],
        });
        let json: serde_json::Value = serde_json::to_value(&response).unwrap();

        assert!(json.get("calculation_id").is_some());
        assert!(json.get("generated_at").is_some());
        assert!(json.get("totals").is_some());
        assert!(json.get("periods").unwrap().as_array().unwrap().is_empty());
        assert!(json.get("result").is_none());
    }
}
