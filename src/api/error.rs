//! Client-facing error handling.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl below
//! is the single place where failures become HTTP responses. Panics are
//! rendered by [`handle_panic`] with the same 500 body.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::db::DbError;

const INTERNAL_MESSAGE: &str = "Something went wrong!";

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending body field
    #[schema(example = "Name")]
    pub field: String,
    /// Human-readable reason
    #[schema(example = "Name is required")]
    pub message: String,
}

impl FieldError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }
}

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Todo not found")]
    pub message: String,
    /// Underlying error detail, present for server faults and rejected bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validation failure response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Errors surfaced by request handlers.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Request validation failed: {0:?}")]
    #[diagnostic(code(todo_api::api::validation))]
    Validation(Vec<FieldError>),

    #[error("Invalid request body: {0}")]
    #[diagnostic(code(todo_api::api::invalid_body))]
    InvalidBody(#[from] JsonRejection),

    #[error("Todo not found")]
    #[diagnostic(code(todo_api::api::not_found))]
    NotFound,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(DbError),
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation { field, message } => {
                ApiError::Validation(vec![FieldError { field, message }])
            }
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                debug!(?errors, "request rejected by validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
            // Always 400, whatever status the extractor would pick
            ApiError::InvalidBody(rejection) => {
                debug!(%rejection, "request body rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        message: "Invalid request body".to_string(),
                        error: Some(rejection.body_text()),
                    }),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: "Todo not found".to_string(),
                    error: None,
                }),
            )
                .into_response(),
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                internal_error(err.to_string())
            }
        }
    }
}

/// Render a panic caught by `CatchPanicLayer` as a 500 JSON body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "handler panicked");
    internal_error(detail)
}

fn internal_error(detail: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: INTERNAL_MESSAGE.to_string(),
            error: Some(detail),
        }),
    )
        .into_response()
}
