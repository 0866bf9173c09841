// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firebase Authentication client (Identity Toolkit REST API).
//!
//! Handles:
//! - Email/password sign-in and sign-up
//! - Password reset emails
//! - Local sign-out
//! - Auth-state notifications to subscribers

use crate::models::AuthUser;
use crate::services::identity::{
    AuthError, IdentityProvider, SessionCallback, SubscriberSet, Subscription,
};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Identity Toolkit REST client.
#[derive(Clone)]
pub struct FirebaseAuth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    subscribers: SubscriberSet,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'static str,
    email: &'a str,
}

/// Response from `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseAuth {
    /// Create a client for the given API key.
    ///
    /// `base_url` is the Identity Toolkit root, e.g.
    /// `https://identitytoolkit.googleapis.com/v1`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed building identity HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            subscribers: SubscriberSet::default(),
        })
    }

    /// Identity currently signed in through this client.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.subscribers.current()
    }

    async fn post<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let url = format!("{}/accounts:{}", self.base_url, method);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AuthError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.is_server_error() {
                return Err(AuthError::unavailable(format!("HTTP {}: {}", status, body)));
            }

            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => AuthError::from_provider_message(&envelope.error.message),
                Err(_) => AuthError::new(
                    format!("HTTP_{}", status.as_u16()),
                    format!("HTTP {}: {}", status, body),
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::invalid_response(format!("JSON parse error: {}", e)))
    }

    async fn password_call(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let account: AccountResponse = self
            .post(
                method,
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let user = AuthUser {
            uid: account.local_id,
            email: account.email,
        };
        self.subscribers.publish(Some(user.clone()));
        Ok(user)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self
            .password_call("signInWithPassword", email, password)
            .await?;
        tracing::info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self.password_call("signUp", email, password).await?;
        tracing::info!(uid = %user.uid, "Account created");
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let _: serde_json::Value = self
            .post(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email,
                },
            )
            .await?;
        tracing::info!("Password reset email requested");
        Ok(())
    }

    /// Sign-out is local: the REST API keeps no server-side session.
    async fn sign_out(&self) -> Result<(), AuthError> {
        self.subscribers.publish(None);
        tracing::info!("Signed out");
        Ok(())
    }

    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}
