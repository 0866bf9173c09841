// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Match results and the Home screen view model.
//!
//! Nothing here is persisted: every Home load rebuilds these from live
//! search responses.

use super::team::{Sport, TeamSelection};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Placeholder for a score that could not be found.
pub const SCORE_PLACEHOLDER: &str = "N/A";
/// Placeholder for a team name that could not be found.
pub const NAME_PLACEHOLDER: &str = "Unknown";
/// Shown on a card whose search request failed.
pub const NO_DATA_MESSAGE: &str = "No match data available.";
/// Shown on Home when the user has no stored teams.
pub const EMPTY_HOME_MESSAGE: &str = "No teams yet. Add a team to start tracking results.";

/// Latest match for a tracked team, extracted from a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct MatchResult {
    pub team_name: String,
    pub sport: String,
    pub team1_name: String,
    pub team2_name: String,
    pub score1: String,
    pub score2: String,
    pub thumbnail1: Option<String>,
    pub thumbnail2: Option<String>,
}

impl MatchResult {
    /// Result used when the response carries no usable match.
    pub fn placeholder(team: &TeamSelection) -> Self {
        Self {
            team_name: team.team_name.clone(),
            sport: team.sport.clone(),
            team1_name: NAME_PLACEHOLDER.to_string(),
            team2_name: NAME_PLACEHOLDER.to_string(),
            score1: SCORE_PLACEHOLDER.to_string(),
            score2: SCORE_PLACEHOLDER.to_string(),
            thumbnail1: None,
            thumbnail2: None,
        }
    }
}

/// How the shell lays out a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub enum CardLayout {
    /// Two sides with crests and a score line
    Standard,
    /// Cricket: runs per side stacked as innings, no crests
    Innings,
}

impl CardLayout {
    pub fn for_sport(sport: &str) -> Self {
        match sport.parse::<Sport>() {
            Ok(Sport::Cricket) => CardLayout::Innings,
            _ => CardLayout::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub enum CardStatus {
    Result { result: MatchResult },
    NoData { message: String },
}

/// One entry in the Home list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct MatchCard {
    pub team_name: String,
    pub sport: String,
    /// e.g. "Arsenal (Soccer)"
    pub label: String,
    pub layout: CardLayout,
    pub status: CardStatus,
}

impl MatchCard {
    pub fn with_result(team: &TeamSelection, result: MatchResult) -> Self {
        Self::new(team, CardStatus::Result { result })
    }

    pub fn no_data(team: &TeamSelection) -> Self {
        Self::new(
            team,
            CardStatus::NoData {
                message: NO_DATA_MESSAGE.to_string(),
            },
        )
    }

    fn new(team: &TeamSelection, status: CardStatus) -> Self {
        let sport_label = team
            .sport
            .parse::<Sport>()
            .map(|s| s.label().to_string())
            .unwrap_or_else(|_| team.sport.clone());

        Self {
            team_name: team.team_name.clone(),
            sport: team.sport.clone(),
            label: format!("{} ({})", team.team_name, sport_label),
            layout: CardLayout::for_sport(&team.sport),
            status,
        }
    }
}

/// Home screen view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct HomeView {
    pub cards: Vec<MatchCard>,
    /// Set when the user has no stored teams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Set when the team list could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl HomeView {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            empty_message: Some(EMPTY_HOME_MESSAGE.to_string()),
            load_error: None,
        }
    }
}
