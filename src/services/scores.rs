// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Score extraction from search responses.
//!
//! The match spotlight lives at `sports_results.game_spotlight.teams` and
//! must hold exactly two entries. Where a side's score sits depends on the
//! sport, so the score reader is looked up by sport tag with a generic
//! fallback. Extraction never fails: anything missing becomes a placeholder.

use crate::models::match_result::{NAME_PLACEHOLDER, SCORE_PLACEHOLDER};
use crate::models::{MatchResult, Sport, TeamSelection};
use serde_json::Value;
use std::collections::HashMap;

const SPOTLIGHT_TEAMS: &str = "/sports_results/game_spotlight/teams";

/// Reads one side's score from its spotlight entry.
pub type ScoreReader = fn(&Value) -> Option<String>;

/// Render a JSON scalar as display text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Default reader: `score` as a scalar, or its `total` / `T` field.
pub fn generic_score(entry: &Value) -> Option<String> {
    let score = entry.get("score")?;
    scalar_text(score).or_else(|| {
        score
            .get("total")
            .or_else(|| score.get("T"))
            .and_then(scalar_text)
    })
}

/// Cricket reader: total runs under `score.runs`.
pub fn cricket_runs(entry: &Value) -> Option<String> {
    entry.get("score")?.get("runs").and_then(scalar_text)
}

/// Sport tag → score reader table.
#[derive(Clone)]
pub struct ScoreExtractors {
    by_sport: HashMap<String, ScoreReader>,
    fallback: ScoreReader,
}

impl Default for ScoreExtractors {
    fn default() -> Self {
        Self::new(generic_score).with(Sport::Cricket.value(), cricket_runs)
    }
}

impl ScoreExtractors {
    /// Empty table that uses `fallback` for every sport.
    pub fn new(fallback: ScoreReader) -> Self {
        Self {
            by_sport: HashMap::new(),
            fallback,
        }
    }

    /// Register a reader for a sport tag.
    pub fn with(mut self, sport: impl Into<String>, reader: ScoreReader) -> Self {
        self.by_sport.insert(sport.into(), reader);
        self
    }

    pub fn reader_for(&self, sport: &str) -> ScoreReader {
        self.by_sport.get(sport).copied().unwrap_or(self.fallback)
    }

    /// Build the match result for `team` from a search response.
    pub fn extract(&self, team: &TeamSelection, response: &Value) -> MatchResult {
        let entries = match response.pointer(SPOTLIGHT_TEAMS).and_then(Value::as_array) {
            Some(entries) if entries.len() == 2 => entries,
            other => {
                tracing::debug!(
                    team = %team.team_name,
                    sport = %team.sport,
                    entries = other.map(Vec::len),
                    "No match spotlight in search response"
                );
                return MatchResult::placeholder(team);
            }
        };

        let read_score = self.reader_for(&team.sport);
        let side = |entry: &Value| {
            let name = entry
                .get("name")
                .and_then(scalar_text)
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
            let score = read_score(entry).unwrap_or_else(|| SCORE_PLACEHOLDER.to_string());
            let thumbnail = entry
                .get("thumbnail")
                .and_then(Value::as_str)
                .map(str::to_string);
            (name, score, thumbnail)
        };

        let (team1_name, score1, thumbnail1) = side(&entries[0]);
        let (team2_name, score2, thumbnail2) = side(&entries[1]);

        MatchResult {
            team_name: team.team_name.clone(),
            sport: team.sport.clone(),
            team1_name,
            team2_name,
            score1,
            score2,
            thumbnail1,
            thumbnail2,
        }
    }
}
