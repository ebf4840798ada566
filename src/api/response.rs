//! Response types for the Leave and Compensation Engine API.
//!
//! This module defines the error response structures, error mapping and the
//! success bodies for the leave endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{LeaveBalance, PrecheckOutcome, PrecheckResult};
use crate::error::EngineError;
use crate::models::AuditTrace;

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
        match error {
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
            EngineError::UnknownMonth { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_MONTH",
                    format!("Unknown month name: {}", name),
                    "Months must be full English names such as 'January'",
                ),
            },
            EngineError::InvalidLeaveRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE_RANGE",
                    format!("End date {} is before start date {}", end, start),
                    "A leave request's end date must not precede its start date",
                ),
            },
            EngineError::FuturePeriod { month, year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FUTURE_PERIOD",
                    format!("Cannot generate payslip for future period {} {}", month, year),
                    "Payslips may be generated for the current month or earlier",
                ),
            },
            EngineError::CtcNotFound { employee_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CTC_NOT_FOUND",
                    format!(
                        "No CTC record found for employee '{}' effective on {}",
                        employee_id, date
                    ),
                    "The employee has no compensation record in effect for the date",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// Response body for the `/leave/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// The derived leave balance.
    pub balance: LeaveBalance,
    /// The audit trace of the derivation.
    pub audit_trace: AuditTrace,
}

/// The excess-leave warning attached to an allowed-with-confirmation
/// pre-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcessWarning {
    /// How many requested days exceed the remaining balance.
    pub excess_days: i64,
}

/// Response body for the `/leave/precheck` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecheckResponse {
    /// Whether the application may be submitted.
    pub allowed: bool,
    /// Why the application was refused, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The excess-leave warning, when the request overdraws the balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<ExcessWarning>,
    /// The number of days the candidate range requests.
    pub request_days: i64,
    /// The audit trace of the decision.
    pub audit_trace: AuditTrace,
}

impl PrecheckResponse {
    /// Builds the response body from a pre-check result.
    pub fn from_result(result: PrecheckResult, duration_us: u64) -> Self {
        let audit_trace = AuditTrace {
            steps: result.audit_steps,
            warnings: vec![],
            duration_us,
        };
        match result.outcome {
            PrecheckOutcome::Allowed => Self {
                allowed: true,
                reason: None,
                warning: None,
                request_days: result.request_days,
                audit_trace,
            },
            PrecheckOutcome::AllowedWithWarning { excess_days } => Self {
                allowed: true,
                reason: None,
                warning: Some(ExcessWarning { excess_days }),
                request_days: result.request_days,
                audit_trace,
            },
            PrecheckOutcome::Rejected { reason } => Self {
                allowed: false,
                reason: Some(reason),
                warning: None,
                request_days: result.request_days,
                audit_trace,
            },
        }
    }
}
