//! API error type shared by all HTTP modules.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::handlers::academic::{
    CreateElectiveCycleError, DeleteElectiveCycleError, DisableElectiveCycleError,
    GetElectiveCycleError,
};
use crate::application::handlers::establishment::{
    CreateInstitutionError, PropagateElectiveCycleError,
};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            code if code.is_validation() => ApiError::BadRequest(err.message),
            code if code.is_not_found() => ApiError::NotFound(err.message),
            ErrorCode::DuplicateYear | ErrorCode::CycleInUse => ApiError::Conflict(err.message),
            _ => {
                tracing::error!(error = %err, "Request failed");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<CreateElectiveCycleError> for ApiError {
    fn from(err: CreateElectiveCycleError) -> Self {
        match err {
            CreateElectiveCycleError::DuplicateYear(_) => ApiError::Conflict(err.to_string()),
            CreateElectiveCycleError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CreateElectiveCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<DisableElectiveCycleError> for ApiError {
    fn from(err: DisableElectiveCycleError) -> Self {
        match err {
            DisableElectiveCycleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DisableElectiveCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<DeleteElectiveCycleError> for ApiError {
    fn from(err: DeleteElectiveCycleError) -> Self {
        match err {
            DeleteElectiveCycleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DeleteElectiveCycleError::InUse { .. } => ApiError::Conflict(err.to_string()),
            DeleteElectiveCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<GetElectiveCycleError> for ApiError {
    fn from(err: GetElectiveCycleError) -> Self {
        match err {
            GetElectiveCycleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            GetElectiveCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<PropagateElectiveCycleError> for ApiError {
    fn from(err: PropagateElectiveCycleError) -> Self {
        match err {
            PropagateElectiveCycleError::CycleNotFound(_) => ApiError::NotFound(err.to_string()),
            PropagateElectiveCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<CreateInstitutionError> for ApiError {
    fn from(err: CreateInstitutionError) -> Self {
        match err {
            CreateInstitutionError::CycleNotFound(_) => ApiError::NotFound(err.to_string()),
            CreateInstitutionError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CreateInstitutionError::Domain(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::conflict(msg)),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
