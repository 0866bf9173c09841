// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session middleware for screens that need a signed-in user.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Middleware that requires a signed-in session.
///
/// Inserts the session's [`crate::models::AuthUser`] into request extensions.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(user) = state.session.current().user else {
        return AppError::Unauthorized("You must be logged in.").into_response();
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}
