// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, Register, ResetPassword and Logout.
//!
//! Each form submission is guarded against re-entry, validated locally, then
//! sent to the identity provider exactly once. Success and failure both come
//! back as a notice.

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::forms::{LoginForm, RegisterForm, ResetPasswordForm};
use crate::models::{Notice, Screen, UserProfile};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/reset-password", post(reset_password))
        .route("/api/logout", post(logout))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginForm>,
) -> Result<Json<Notice>> {
    let _submission = state.forms.login.begin()?;
    form.validate()?;

    state
        .identity
        .sign_in(form.email.trim(), &form.password)
        .await
        .map_err(|e| AppError::identity("Login Failed", e))?;

    Ok(Json(Notice::new("Login Successful", "You are now logged in!")))
}

/// Create the account, then store the profile document.
///
/// The two writes are not atomic: if the profile write fails the account
/// still exists and the user is told so.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<Notice>> {
    let _submission = state.forms.register.begin()?;
    form.validate()?;

    let email = form.email.trim();
    let user = state
        .identity
        .create_account(email, &form.password)
        .await
        .map_err(|e| AppError::identity("Registration Failed", e))?;

    let profile = UserProfile {
        name: form.name.trim().to_string(),
        email: email.to_string(),
    };

    if let Err(e) = state.teams.put_user_profile(&user.uid, &profile).await {
        tracing::error!(uid = %user.uid, error = %e, "Account created but profile write failed");
        return Err(AppError::failed(
            "Registration Failed",
            "Your account was created, but your profile could not be saved. Please try again later.",
        ));
    }

    tracing::info!(uid = %user.uid, "User registered");
    Ok(Json(Notice::new(
        "Registration Successful",
        "Your account has been created!",
    )))
}

async fn reset_password(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ResetPasswordForm>,
) -> Result<Json<Notice>> {
    let _submission = state.forms.reset_password.begin()?;
    form.validate()?;

    state
        .identity
        .send_password_reset(form.email.trim())
        .await
        .map_err(|e| AppError::identity(AppError::GENERIC_TITLE, e))?;

    Ok(Json(
        Notice::new(
            "Password Reset Email Sent",
            "Please check your email for instructions to reset your password.",
        )
        .then_navigate(Screen::Login),
    ))
}

async fn logout(State(state): State<Arc<AppState>>) -> Result<Json<Notice>> {
    let uid = state.session.current().user_id().map(str::to_string);

    state
        .session
        .logout()
        .await
        .map_err(|e| AppError::identity("Logout Failed", e))?;

    if let Some(uid) = uid {
        state.home_views.remove(&uid);
    }

    Ok(Json(
        Notice::new("Logged Out", "You have been logged out.").then_navigate(Screen::Login),
    ))
}
