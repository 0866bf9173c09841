// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Root navigator: which screen group the shell should mount.

use crate::models::NavigatorView;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/navigator", get(get_navigator))
}

async fn get_navigator(State(state): State<Arc<AppState>>) -> Json<NavigatorView> {
    Json(NavigatorView::for_session(&state.session.current()))
}
