// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form bodies, client-side validation and submission guards.

use crate::error::AppError;
use crate::models::{NewTeamSelection, Sport};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Rejects a submission while another one for the same form is in flight.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    busy: AtomicBool,
}

impl SubmitGuard {
    /// Claim the form. Returns `None` if a submission is already running.
    pub fn try_begin(&self) -> Option<Submission<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Submission { guard: self })
    }

    /// Like [`Self::try_begin`], as an error for handlers.
    pub fn begin(&self) -> Result<Submission<'_>, AppError> {
        self.try_begin().ok_or(AppError::SubmissionInProgress)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its form when dropped.
#[derive(Debug)]
pub struct Submission<'a> {
    guard: &'a SubmitGuard,
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

/// One guard per form.
#[derive(Debug, Default)]
pub struct FormGuards {
    pub login: SubmitGuard,
    pub register: SubmitGuard,
    pub reset_password: SubmitGuard,
    pub add_team: SubmitGuard,
}

fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.email, "Email is required.")?;
        require(&self.password, "Password is required.")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.name, "Name is required.")?;
        require(&self.email, "Email is required.")?;
        require(&self.password, "Password is required.")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResetPasswordForm {
    pub email: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.email, "Please enter your email address.")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddTeamForm {
    /// Sport value from the picker; anything outside the set is rejected
    pub sport: Option<String>,
    pub team: String,
}

impl AddTeamForm {
    pub const FILL_ALL_FIELDS: &'static str = "Please fill out all fields";

    /// Check the picker value and return it with the trimmed team name.
    pub fn validate(&self) -> Result<(Sport, String), AppError> {
        let sport = self
            .sport
            .as_deref()
            .and_then(|s| s.parse::<Sport>().ok())
            .ok_or_else(|| AppError::Validation(Self::FILL_ALL_FIELDS.to_string()))?;

        let team = self.team.trim();
        if team.is_empty() {
            return Err(AppError::Validation(Self::FILL_ALL_FIELDS.to_string()));
        }

        Ok((sport, team.to_string()))
    }

    pub fn into_selection(sport: Sport, team_name: String, user_id: &str) -> NewTeamSelection {
        NewTeamSelection {
            user_id: user_id.to_string(),
            sport,
            team_name,
        }
    }
}
