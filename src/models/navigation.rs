// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen groups and root navigation.

use super::session::Session;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Every screen the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub enum Screen {
    Login,
    Register,
    ResetPassword,
    Home,
    AddTeam,
}

/// The screen group mounted at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub enum ScreenGroup {
    /// Waiting for the first auth-state notification
    Loading,
    Unauthenticated,
    Authenticated,
}

impl ScreenGroup {
    pub fn screens(self) -> &'static [Screen] {
        match self {
            ScreenGroup::Loading => &[],
            ScreenGroup::Unauthenticated => {
                &[Screen::Login, Screen::Register, Screen::ResetPassword]
            }
            ScreenGroup::Authenticated => &[Screen::Home, Screen::AddTeam],
        }
    }
}

/// What the root navigator mounts for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct NavigatorView {
    pub group: ScreenGroup,
    pub initial_screen: Option<Screen>,
    pub screens: Vec<Screen>,
}

impl NavigatorView {
    /// Choose the screen group for a session.
    pub fn for_session(session: &Session) -> Self {
        let group = if session.initializing {
            ScreenGroup::Loading
        } else if session.user.is_some() {
            ScreenGroup::Authenticated
        } else {
            ScreenGroup::Unauthenticated
        };

        let screens = group.screens().to_vec();
        Self {
            group,
            initial_screen: screens.first().copied(),
            screens,
        }
    }
}
