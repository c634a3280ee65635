//! Response types for the Court Order Interest Engine API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DamageInterestDetail, InterestMode, SegmentDetail};

/// Response body for a successful `/calculate` call.
///
/// The identifying fields (`calculation_id`, `timestamp`) live only in this
/// HTTP envelope; the engine result itself is a pure function of the request
/// so that recalculation on every input change is cheap and reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation request.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The jurisdiction whose rate table was applied.
    pub jurisdiction: String,
    /// Which statutory rate was used.
    pub mode: InterestMode,
    /// The first date of the calculation range.
    pub start_date: NaiveDate,
    /// The last date of the calculation range.
    pub end_date: NaiveDate,
    /// Ordered interest segments and event marker rows.
    pub details: Vec<SegmentDetail>,
    /// Total interest accrued across all segments.
    pub total: Decimal,
    /// The ending principal.
    pub principal: Decimal,
    /// Per-damage interest for damages within the final rate segment.
    pub final_period_damage_interest_details: Vec<DamageInterestDetail>,
    /// Daily accrual on the ending principal, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_diem: Option<Decimal>,
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration file not found",
                    path,
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Failed to parse configuration file '{}'", path),
                    message,
                ),
            },
            EngineError::JurisdictionNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "JURISDICTION_NOT_FOUND",
                    format!("Jurisdiction not found: {}", code),
                    format!("No rate table is configured for jurisdiction '{}'", code),
                ),
            },
            EngineError::RatesUnavailable { jurisdiction } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "RATES_UNAVAILABLE",
                    format!("Interest rates unavailable for jurisdiction '{}'", jurisdiction),
                    "The rate table contains no rate periods; the calculation cannot proceed",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CALCULATION_ERROR", message),
            },
        }
    }
}
