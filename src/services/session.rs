// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session listener: mirrors the identity provider's auth state.
//!
//! The listener is the only writer of the process-wide [`Session`]. Readers
//! take snapshots with [`SessionListener::current`] or follow changes through
//! [`SessionListener::watch`].

use crate::models::Session;
use crate::services::identity::{AuthError, IdentityProvider, Subscription};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

pub struct SessionListener {
    identity: Arc<dyn IdentityProvider>,
    state: Arc<watch::Sender<Session>>,
    subscription: Mutex<Option<Subscription>>,
}

impl SessionListener {
    /// Subscribe to the provider's auth-state changes.
    ///
    /// The session stays initializing until the provider's first
    /// notification, which providers deliver during `subscribe`.
    pub fn start(identity: Arc<dyn IdentityProvider>) -> Self {
        let (tx, _rx) = watch::channel(Session::initializing());
        let state = Arc::new(tx);

        let sink = state.clone();
        let subscription = identity.subscribe(Box::new(move |user| {
            tracing::debug!(uid = ?user.as_ref().map(|u| &u.uid), "Session updated");
            sink.send_replace(Session::resolved(user));
        }));

        Self {
            identity,
            state,
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver that observes every session change.
    pub fn watch(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Sign out through the provider.
    ///
    /// On failure the session is left as it was; it will follow the next
    /// provider notification.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let uid = self.current().user_id().map(str::to_string);

        if let Err(e) = self.identity.sign_out().await {
            tracing::warn!(uid = ?uid, code = %e.code, "Logout failed");
            return Err(e);
        }

        self.state.send_modify(|session| {
            session.user = None;
            session.initializing = false;
        });
        tracing::info!(uid = ?uid, "User logged out");
        Ok(())
    }

    /// Stop following the provider. Later notifications no longer touch the
    /// session. Calling this more than once is a no-op.
    pub fn shutdown(&self) {
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if let Some(subscription) = subscription {
            subscription.unsubscribe();
            tracing::debug!("Session listener unsubscribed");
        }
    }
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        self.shutdown();
    }
}
