// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Match enrichment for the Home screen.
//!
//! One search request per stored team, all in flight at once. Each request
//! has its own timeout and its own failure: a team whose lookup fails gets a
//! "no data" card while the others still show results. Cards come back in
//! team order regardless of which response arrives first.

use crate::models::{CardStatus, MatchCard, TeamSelection};
use crate::services::scores::ScoreExtractors;
use crate::services::search::{latest_match_query, SearchProvider};
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct MatchEnricher {
    search: Arc<dyn SearchProvider>,
    extractors: ScoreExtractors,
    timeout: Duration,
}

impl MatchEnricher {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        extractors: ScoreExtractors,
        timeout: Duration,
    ) -> Self {
        Self {
            search,
            extractors,
            timeout,
        }
    }

    /// Build one card per team, in the order given.
    pub async fn enrich(&self, teams: &[TeamSelection]) -> Vec<MatchCard> {
        if teams.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let cards = join_all(teams.iter().map(|team| self.card_for(team))).await;

        let failed = cards
            .iter()
            .filter(|card| matches!(card.status, CardStatus::NoData { .. }))
            .count();
        tracing::info!(
            teams = teams.len(),
            failed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Match enrichment complete"
        );

        cards
    }

    async fn card_for(&self, team: &TeamSelection) -> MatchCard {
        let query = latest_match_query(&team.sport, &team.team_name);

        match tokio::time::timeout(self.timeout, self.search.search(&query)).await {
            Ok(Ok(response)) => {
                MatchCard::with_result(team, self.extractors.extract(team, &response))
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    team = %team.team_name,
                    sport = %team.sport,
                    error = %e,
                    "Match lookup failed"
                );
                MatchCard::no_data(team)
            }
            Err(_) => {
                tracing::warn!(
                    team = %team.team_name,
                    sport = %team.sport,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Match lookup timed out"
                );
                MatchCard::no_data(team)
            }
        }
    }
}
