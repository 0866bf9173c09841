// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team Tracker app server
//!
//! Serves the app's screens as JSON view models to the rendering shell,
//! backed by Firebase Authentication, Firestore and a search API.

use std::sync::Arc;
use team_tracker::{
    config::Config,
    db::{FirestoreDb, MemoryStore, TeamRepository},
    services::{FirebaseAuth, SerpApiClient},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Team Tracker");

    // Team selections: Firestore, or memory for offline runs
    let teams: Arc<dyn TeamRepository> = if config.use_memory_store {
        tracing::warn!("Using in-memory team store; selections are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FirestoreDb::new(&config.gcp_project_id).await?)
    };

    let identity = Arc::new(FirebaseAuth::new(
        config.identity_api_url.clone(),
        config.firebase_api_key.clone(),
    )?);
    tracing::info!(url = %config.identity_api_url, "Identity provider configured");

    let search = Arc::new(SerpApiClient::new(
        config.search_api_url.clone(),
        config.search_api_key.clone(),
        config.search_timeout,
    )?);

    // Build shared state (starts the session listener)
    let state = Arc::new(AppState::new(config.clone(), identity, teams, search));

    // Build router
    let app = team_tracker::routes::create_router(state.clone());

    // Start server
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    state.session.shutdown();
    tracing::info!("Shut down");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("team_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
