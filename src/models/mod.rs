// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod match_result;
pub mod navigation;
pub mod notice;
pub mod session;
pub mod team;
pub mod user;

pub use match_result::{CardLayout, CardStatus, HomeView, MatchCard, MatchResult};
pub use navigation::{NavigatorView, Screen, ScreenGroup};
pub use notice::Notice;
pub use session::{AuthUser, Session};
pub use team::{NewTeamSelection, Sport, SportOption, TeamSelection};
pub use user::UserProfile;
