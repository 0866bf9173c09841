// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity provider interface and auth-state subscriptions.
//!
//! The provider pushes auth-state changes to subscribers. A subscriber is
//! called once with the current identity when it subscribes, then on every
//! change, until its [`Subscription`] is cancelled.

use crate::models::AuthUser;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Callback invoked with the new identity (or `None` when signed out).
pub type SessionCallback = Box<dyn Fn(Option<AuthUser>) + Send + Sync>;

/// Error reported by the identity provider.
///
/// `code` is the provider's machine-readable code (e.g. `EMAIL_EXISTS`),
/// `message` its free-form detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

impl AuthError {
    /// Code used when the provider could not be reached.
    pub const NETWORK_REQUEST_FAILED: &'static str = "NETWORK_REQUEST_FAILED";
    /// Code used when the provider answered with a server error.
    pub const PROVIDER_UNAVAILABLE: &'static str = "PROVIDER_UNAVAILABLE";
    /// Code used when a successful response could not be understood.
    pub const INVALID_RESPONSE: &'static str = "INVALID_RESPONSE";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(Self::NETWORK_REQUEST_FAILED, message)
    }

    /// Parse a provider message such as `"WEAK_PASSWORD : Password should be
    /// at least 6 characters"` into code and detail.
    pub fn from_provider_message(raw: &str) -> Self {
        match raw.split_once(" : ") {
            Some((code, detail)) => Self::new(code.trim(), detail.trim()),
            None => Self::new(raw.trim(), raw.trim()),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Self::PROVIDER_UNAVAILABLE, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_RESPONSE, message)
    }

    pub fn is_transport(&self) -> bool {
        self.code == Self::NETWORK_REQUEST_FAILED
    }

    /// The failure is on the provider's side, not in what the user sent.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.code.as_str(),
            Self::NETWORK_REQUEST_FAILED | Self::PROVIDER_UNAVAILABLE | Self::INVALID_RESPONSE
        )
    }

    pub fn is_rate_limited(&self) -> bool {
        self.code == "TOO_MANY_ATTEMPTS_TRY_LATER"
    }

    /// Human-readable text for known codes, a generic message otherwise.
    pub fn user_message(&self) -> &'static str {
        match self.code.as_str() {
            "EMAIL_EXISTS" => "That email address is already in use.",
            "INVALID_EMAIL" => "That email address is not valid.",
            "MISSING_EMAIL" => "Please enter your email address.",
            "MISSING_PASSWORD" => "Please enter your password.",
            "WEAK_PASSWORD" => "Password should be at least 6 characters.",
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Incorrect email or password."
            }
            "USER_DISABLED" => "This account has been disabled.",
            "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
            "OPERATION_NOT_ALLOWED" => "Email and password sign-in is not enabled.",
            Self::NETWORK_REQUEST_FAILED => {
                "Could not reach the sign-in service. Check your connection and try again."
            }
            Self::PROVIDER_UNAVAILABLE => {
                "The sign-in service is unavailable. Please try again later."
            }
            _ => "Something went wrong. Please try again.",
        }
    }
}

/// Operations consumed from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn create_account(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Register for auth-state changes. The callback fires immediately with
    /// the current identity.
    fn subscribe(&self, callback: SessionCallback) -> Subscription;
}

struct SubscriberState {
    current: Option<AuthUser>,
    next_id: u64,
    callbacks: HashMap<u64, SessionCallback>,
}

/// Auth-state fan-out shared by provider implementations.
///
/// Callbacks run while the set is locked: once [`Subscription::unsubscribe`]
/// returns, the removed callback can no longer be running or be called.
/// Callbacks must not call back into the set.
#[derive(Clone)]
pub struct SubscriberSet {
    inner: Arc<Mutex<SubscriberState>>,
}

impl Default for SubscriberSet {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SubscriberSet {
    pub fn new(initial: Option<AuthUser>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubscriberState {
                current: initial,
                next_id: 0,
                callbacks: HashMap::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SubscriberState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> Option<AuthUser> {
        self.lock().current.clone()
    }

    /// Add a subscriber and deliver the current identity to it.
    pub fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;

        callback(state.current.clone());
        state.callbacks.insert(id, callback);

        Subscription {
            set: Some(Arc::downgrade(&self.inner)),
            id,
        }
    }

    /// Record a new identity and notify every subscriber.
    pub fn publish(&self, user: Option<AuthUser>) {
        let mut state = self.lock();
        state.current = user;
        for callback in state.callbacks.values() {
            callback(state.current.clone());
        }
        tracing::debug!(
            subscribers = state.callbacks.len(),
            signed_in = state.current.is_some(),
            "Auth state changed"
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().callbacks.len()
    }
}

/// Handle for an auth-state subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription cancels it"]
pub struct Subscription {
    set: Option<Weak<Mutex<SubscriberState>>>,
    id: u64,
}

impl Subscription {
    /// Cancel the subscription.
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        let Some(set) = self.set.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        let mut state = set.lock().unwrap_or_else(|e| e.into_inner());
        state.callbacks.remove(&self.id);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
