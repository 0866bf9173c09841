// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory session state.

use serde::Serialize;

/// Identity reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    /// Provider-assigned user id (Firebase `localId`)
    pub uid: String,
    pub email: Option<String>,
}

/// Which user, if any, is currently authenticated.
///
/// There is exactly one live `Session` per process. It starts out
/// initializing and settles on the first auth-state notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub initializing: bool,
}

impl Session {
    /// Session at process start, before the provider has reported anything.
    pub fn initializing() -> Self {
        Self {
            user: None,
            initializing: true,
        }
    }

    /// Session after a notification from the provider.
    pub fn resolved(user: Option<AuthUser>) -> Self {
        Self {
            user,
            initializing: false,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initializing()
    }
}
