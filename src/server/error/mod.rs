//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every failure is reported to clients as `500 Internal Server Error` with an
//! `ErrorDto { message }` body; "not found" is not distinguished at the status level.

pub mod config;
pub mod store;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, store::StoreError},
};

/// Message returned for request bodies that cannot be decoded and for masked store failures.
pub const BAD_REQUEST_MESSAGE: &str = "bad request";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store operation error.
    ///
    /// The store's own message is returned to the client.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database error raised outside a request, e.g. while connecting or migrating.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error from binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The path segment holding the project id could not be extracted, e.g. it does
    /// not decode to UTF-8.
    #[error("invalid object id: {0}")]
    InvalidPath(#[from] PathRejection),

    /// Client-input error: the request body could not be decoded.
    ///
    /// Also used to mask store failures on create and list.
    #[error("bad request")]
    BadRequest,
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 500 Internal Server Error with the store message - For `StoreErr`
/// - 500 Internal Server Error with `"bad request"` - For `BadRequest`
/// - 500 Internal Server Error with an invalid id message - For `InvalidPath`
/// - 500 Internal Server Error with a generic message - For startup-only variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest => error_response(BAD_REQUEST_MESSAGE.to_string()),
            err @ Self::InvalidPath(_) => {
                tracing::debug!("Rejected project path: {}", err);
                error_response(err.to_string())
            }
            Self::StoreErr(StoreError::DbErr(err)) => {
                tracing::error!("Store operation failed: {}", err);
                error_response(err.to_string())
            }
            Self::StoreErr(err) => {
                tracing::debug!("Store operation rejected: {}", err);
                error_response(err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto { message }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response("Internal server error".to_string())
    }
}
