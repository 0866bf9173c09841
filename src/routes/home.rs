// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home screen: the user's teams and their latest matches.

use crate::models::{AuthUser, HomeView};
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

const LOAD_ERROR_MESSAGE: &str = "Could not load your teams. Please try again.";

/// Home routes (require a session).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/home", get(get_home))
}

/// Load the user's teams, then look up each team's latest match.
///
/// A failed team load keeps whatever this user saw last (or an empty list)
/// and reports the failure alongside it. Lookup failures only affect their
/// own card.
async fn get_home(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<HomeView> {
    let mut teams = match state.teams.teams_for_user(&user.uid).await {
        Ok(teams) => teams,
        Err(e) => {
            tracing::error!(uid = %user.uid, error = %e, "Failed to load teams");
            let mut view = state
                .home_views
                .get(&user.uid)
                .map(|v| v.clone())
                .unwrap_or_default();
            view.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
            return Json(view);
        }
    };

    let view = if teams.is_empty() {
        tracing::debug!(uid = %user.uid, "No teams stored");
        HomeView::empty()
    } else {
        // Firestore returns matches in no particular order
        teams.sort_by_key(|t| t.created_at);
        HomeView {
            cards: state.enricher.enrich(&teams).await,
            ..HomeView::default()
        }
    };

    state.home_views.insert(user.uid.clone(), view.clone());
    Json(view)
}
