// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team Tracker: follow your teams and their latest results
//!
//! This crate is the application core behind the Team Tracker shell. It
//! keeps the signed-in session, stores each user's team selections in
//! Firestore and looks up the latest match for every tracked team.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use dashmap::DashMap;
use db::TeamRepository;
use forms::FormGuards;
use models::HomeView;
use services::{
    IdentityProvider, MatchEnricher, ScoreExtractors, SearchProvider, SessionListener,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub identity: Arc<dyn IdentityProvider>,
    pub session: SessionListener,
    pub teams: Arc<dyn TeamRepository>,
    pub enricher: MatchEnricher,
    pub forms: FormGuards,
    /// Last Home view shown to each user, kept for failed reloads
    pub home_views: DashMap<String, HomeView>,
}

impl AppState {
    /// Wire the collaborators together and start the session listener.
    pub fn new(
        config: Config,
        identity: Arc<dyn IdentityProvider>,
        teams: Arc<dyn TeamRepository>,
        search: Arc<dyn SearchProvider>,
    ) -> Self {
        let session = SessionListener::start(identity.clone());
        let enricher = MatchEnricher::new(search, ScoreExtractors::default(), config.search_timeout);

        Self {
            config,
            identity,
            session,
            teams,
            enricher,
            forms: FormGuards::default(),
            home_views: DashMap::new(),
        }
    }
}
