//! Uniform error envelope for the REST API
//!
//! Every non-2xx response carries the same body:
//!
//! ```json
//! {
//!   "timestamp": "2025-01-01T12:00:00Z",
//!   "status": 404,
//!   "error": "Not Found",
//!   "message": "Zone not found: 7",
//!   "path": "/api/zones/7",
//!   "traceId": "5f0c...",
//!   "fieldErrors": []
//! }
//! ```
//!
//! | Condition | Status | Message |
//! |-----------|--------|---------|
//! | Invalid argument | 400 | pass-through |
//! | Structural validation | 400 | "Validation failed" + field errors |
//! | Not found | 404 | pass-through |
//! | Conflict state | 422 | pass-through |
//! | Storage constraint | 409 | "Zone name already exists" / "Data integrity violation" |
//! | Anything else | 500 | "Unexpected error" |

use axum::{
    extract::{rejection::JsonRejection, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::convert::Infallible;
use tracing::{error, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::application::errors::ServiceError;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub trace_id: String,
    pub field_errors: Vec<FieldErrorDto>,
}

/// Per-request data the error envelope needs, taken from the transport
///
/// Handlers extract this and pass it explicitly to the translator, so no
/// error path depends on ambient request state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub trace_id: String,
}

impl RequestContext {
    pub fn new(path: impl Into<String>, trace_id: Option<&str>) -> Self {
        let trace_id = trace_id
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            path: path.into(),
            trace_id,
        }
    }

    /// Translate a service failure
    pub fn error(&self, err: ServiceError) -> ApiError {
        let (status, message) = match err {
            ServiceError::InvalidArgument(message) => (StatusCode::BAD_REQUEST, message),
            ServiceError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ServiceError::ConflictState(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ServiceError::StorageConstraint(cause) => {
                warn!(trace_id = %self.trace_id, cause = %cause, "Storage constraint violated");
                let message = if signals_duplicate(&cause) {
                    "Zone name already exists"
                } else {
                    "Data integrity violation"
                };
                (StatusCode::CONFLICT, message.to_string())
            }
            ServiceError::Unexpected(cause) => {
                error!(trace_id = %self.trace_id, path = %self.path, error = %cause, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };

        self.build(status, message, Vec::new())
    }

    /// Translate structural field violations: one entry per reported violation
    pub fn validation(&self, errors: &ValidationErrors) -> ApiError {
        let mut field_errors: Vec<FieldErrorDto> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, violations)| {
                let field = camel_case(&field.to_string());
                violations.iter().map(move |violation| FieldErrorDto {
                    field: field.clone(),
                    message: violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));

        self.build(
            StatusCode::BAD_REQUEST,
            "Validation failed".to_string(),
            field_errors,
        )
    }

    /// Unwrap a JSON body and run its structural validation
    pub fn json<T>(&self, payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let Json(body) = payload
            .map_err(|rejection| self.build(StatusCode::BAD_REQUEST, rejection.body_text(), Vec::new()))?;
        body.validate().map_err(|errors| self.validation(&errors))?;
        Ok(body)
    }

    /// Parse a numeric path id
    pub fn id<I: From<i64>>(&self, raw: &str) -> Result<I, ApiError> {
        raw.parse::<i64>().map(I::from).map_err(|_| {
            self.build(
                StatusCode::BAD_REQUEST,
                format!("Invalid id: {}", raw),
                Vec::new(),
            )
        })
    }

    pub fn route_not_found(&self) -> ApiError {
        self.build(
            StatusCode::NOT_FOUND,
            format!("No route for {}", self.path),
            Vec::new(),
        )
    }

    fn build(&self, status: StatusCode, message: String, field_errors: Vec<FieldErrorDto>) -> ApiError {
        ApiError {
            status,
            body: ErrorResponse {
                timestamp: Utc::now(),
                status: status.as_u16(),
                error: status.canonical_reason().unwrap_or("Unknown").to_string(),
                message,
                path: self.path.clone(),
                trace_id: self.trace_id.clone(),
                field_errors,
            },
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let trace_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok());
        Ok(Self::new(parts.uri.path(), trace_id))
    }
}

/// A translated failure, ready to be sent
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Whether a storage constraint message reports a duplicate key
fn signals_duplicate(cause: &str) -> bool {
    let cause = cause.to_lowercase();
    cause.contains("duplicate") || cause.contains("unique")
}

/// `danger_level` -> `dangerLevel`, matching the JSON field names
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
