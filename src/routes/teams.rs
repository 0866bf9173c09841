// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AddTeam screen: sport picker and team selection writes.

use crate::error::{AppError, Result};
use crate::forms::AddTeamForm;
use crate::models::{Notice, Screen, Sport, SportOption};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sports", get(list_sports))
        .route("/api/teams", post(add_team))
}

/// Sports offered by the picker.
async fn list_sports() -> Json<Vec<SportOption>> {
    Json(Sport::options())
}

/// Store a new team selection for the signed-in user.
///
/// Validation runs before the session check so an incomplete form never
/// reaches the network.
async fn add_team(
    State(state): State<Arc<AppState>>,
    Json(form): Json<AddTeamForm>,
) -> Result<Json<Notice>> {
    let _submission = state.forms.add_team.begin()?;
    let (sport, team_name) = form.validate()?;

    let session = state.session.current();
    let user_id = session
        .user_id()
        .ok_or(AppError::Unauthorized("You must be logged in to add a team"))?;

    let record =
        AddTeamForm::into_selection(sport, team_name, user_id).into_record(chrono::Utc::now());

    if let Err(e) = state.teams.add_team(&record).await {
        tracing::error!(user_id, sport = %sport, error = %e, "Error adding team");
        return Err(AppError::failed(
            AppError::GENERIC_TITLE,
            "Failed to add team. Please try again later.",
        ));
    }

    tracing::info!(user_id, sport = %sport, team = %record.team_name, "Team added");
    Ok(Json(
        Notice::new("Success", "Team added successfully!").then_navigate(Screen::Home),
    ))
}
