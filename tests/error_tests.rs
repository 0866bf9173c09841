// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use team_tracker::error::AppError;
use team_tracker::services::AuthError;

mod common;
use common::body_json;

#[tokio::test]
async fn test_identity_error_status_by_code() {
    let rate_limited = AppError::identity(
        "Login Failed",
        AuthError::from_provider_message("TOO_MANY_ATTEMPTS_TRY_LATER : slow down"),
    )
    .into_response();
    assert_eq!(rate_limited.status(), StatusCode::TOO_MANY_REQUESTS);

    let offline = AppError::identity("Login Failed", AuthError::network("connect refused"))
        .into_response();
    assert_eq!(offline.status(), StatusCode::BAD_GATEWAY);

    let outage = AppError::identity("Login Failed", AuthError::unavailable("HTTP 503"))
        .into_response();
    assert_eq!(outage.status(), StatusCode::BAD_GATEWAY);

    let garbled = AppError::identity("Login Failed", AuthError::invalid_response("bad JSON"))
        .into_response();
    assert_eq!(garbled.status(), StatusCode::BAD_GATEWAY);

    let rejected = AppError::identity(
        "Registration Failed",
        AuthError::from_provider_message("EMAIL_EXISTS"),
    )
    .into_response();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_identity_error_body_has_title_and_friendly_message() {
    let response = AppError::identity(
        "Registration Failed",
        AuthError::from_provider_message("WEAK_PASSWORD : Password should be at least 6 characters"),
    )
    .into_response();

    let body = body_json(response).await;
    assert_eq!(body["error"], "identity_error");
    assert_eq!(body["title"], "Registration Failed");
    assert_eq!(body["message"], "Password should be at least 6 characters.");
}

#[tokio::test]
async fn test_internal_details_are_not_exposed() {
    let response = AppError::Database("connection reset by peer".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["title"], AppError::GENERIC_TITLE);
    assert_eq!(body["message"], AppError::GENERIC_MESSAGE);

    let response = AppError::SearchApi("HTTP 500: <html>".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(!body["message"].as_str().unwrap().contains("html"));
}

#[tokio::test]
async fn test_submission_in_progress_is_conflict() {
    let response = AppError::SubmissionInProgress.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "submission_in_progress");
}

#[test]
fn test_unknown_provider_code_uses_generic_message() {
    let err = AuthError::from_provider_message("SOMETHING_NEW : details");
    assert_eq!(err.code, "SOMETHING_NEW");
    assert!(!err.is_transport());
    assert!(!err.is_rate_limited());
    assert!(!err.user_message().is_empty());
}
