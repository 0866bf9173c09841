// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search API client used to look up a team's latest match.
//!
//! The response schema is not versioned; callers treat the body as loose
//! JSON and pick out what they need.

use crate::error::AppError;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// Something that can answer a free-text sports query.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<serde_json::Value, AppError>;
}

/// Build the query used to find a team's latest match.
pub fn latest_match_query(sport: &str, team_name: &str) -> String {
    format!("{} {} latest match", sport, team_name)
}

/// SerpApi-compatible search client (`GET ?q=...&api_key=...`).
#[derive(Clone)]
pub struct SerpApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed building search HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::SearchApi(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Search API rate limit hit (429)");
            }

            return Err(AppError::SearchApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SearchApi(format!("JSON parse error: {}", e)))
    }
}
