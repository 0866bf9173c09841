// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every error body carries a `title` and `message` so the shell can show it
//! as a blocking notice without knowing the error taxonomy.

use crate::services::identity::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required: {0}")]
    Unauthorized(&'static str),

    /// Rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Submission already in progress")]
    SubmissionInProgress,

    #[error("{title}: {source}")]
    Identity {
        title: &'static str,
        #[source]
        source: AuthError,
    },

    /// A user-facing failure whose cause has already been logged.
    #[error("{title}: {message}")]
    Failed {
        title: &'static str,
        message: String,
    },

    #[error("Search API error: {0}")]
    SearchApi(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const VALIDATION_TITLE: &'static str = "Validation Error";
    pub const GENERIC_TITLE: &'static str = "Error";
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";

    pub fn identity(title: &'static str, source: AuthError) -> Self {
        AppError::Identity { title, source }
    }

    pub fn failed(title: &'static str, message: impl Into<String>) -> Self {
        AppError::Failed {
            title,
            message: message.into(),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    title: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, title, message) = match &self {
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                Self::GENERIC_TITLE,
                msg.to_string(),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                Self::VALIDATION_TITLE,
                msg.clone(),
            ),
            AppError::SubmissionInProgress => (
                StatusCode::CONFLICT,
                "submission_in_progress",
                Self::GENERIC_TITLE,
                "Please wait for the current request to finish.".to_string(),
            ),
            AppError::Identity { title, source } => {
                tracing::warn!(code = %source.code, error = %source.message, "Identity provider error");
                let status = if source.is_upstream() {
                    StatusCode::BAD_GATEWAY
                } else if source.is_rate_limited() {
                    StatusCode::TOO_MANY_REQUESTS
                } else {
                    StatusCode::BAD_REQUEST
                };
                (
                    status,
                    "identity_error",
                    *title,
                    source.user_message().to_string(),
                )
            }
            AppError::Failed { title, message } => {
                (StatusCode::BAD_GATEWAY, "failed", *title, message.clone())
            }
            AppError::SearchApi(msg) => {
                tracing::error!(error = %msg, "Search API error");
                (
                    StatusCode::BAD_GATEWAY,
                    "search_error",
                    Self::GENERIC_TITLE,
                    Self::GENERIC_MESSAGE.to_string(),
                )
            }
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    Self::GENERIC_TITLE,
                    Self::GENERIC_MESSAGE.to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Self::GENERIC_TITLE,
                    Self::GENERIC_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            title: title.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
