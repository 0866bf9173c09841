// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use team_tracker::config::Config;
use team_tracker::db::{FirestoreDb, MemoryStore, TeamRepository};
use team_tracker::error::AppError;
use team_tracker::models::{AuthUser, TeamSelection, UserProfile};
use team_tracker::routes::create_router;
use team_tracker::services::{
    AuthError, IdentityProvider, SearchProvider, SessionCallback, SubscriberSet, Subscription,
};
use team_tracker::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

// ─── Fake identity provider ─────────────────────────────────────────────

/// Identity provider with scripted outcomes and call counting.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeIdentity {
    pub subscribers: SubscriberSet,
    /// email → password for accounts that can sign in
    pub accounts: Mutex<HashMap<String, String>>,
    pub calls: AtomicUsize,
    pub fail_sign_out: AtomicBool,
    /// Holds every provider call open this long
    pub delay: Mutex<Option<Duration>>,
}

#[allow(dead_code)]
impl FakeIdentity {
    pub fn with_account(email: &str, password: &str) -> Self {
        let fake = Self::default();
        fake.accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), password.to_string());
        fake
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn uid_for(email: &str) -> String {
        format!("uid-{}", email.split('@').next().unwrap_or(email))
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.enter().await;
        let known = self.accounts.lock().unwrap().get(email).cloned();
        match known {
            Some(expected) if expected == password => {
                let user = AuthUser {
                    uid: Self::uid_for(email),
                    email: Some(email.to_string()),
                };
                self.subscribers.publish(Some(user.clone()));
                Ok(user)
            }
            _ => Err(AuthError::new("INVALID_LOGIN_CREDENTIALS", "bad credentials")),
        }
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.enter().await;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AuthError::new("EMAIL_EXISTS", "exists"));
        }
        accounts.insert(email.to_string(), password.to_string());
        drop(accounts);

        let user = AuthUser {
            uid: Self::uid_for(email),
            email: Some(email.to_string()),
        };
        self.subscribers.publish(Some(user.clone()));
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.enter().await;
        if self.accounts.lock().unwrap().contains_key(email) {
            Ok(())
        } else {
            Err(AuthError::new("EMAIL_NOT_FOUND", "no such user"))
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.enter().await;
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::network("offline"));
        }
        self.subscribers.publish(None);
        Ok(())
    }

    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}

// ─── Fake search API ─────────────────────────────────────────────────────

/// Search provider answering from a query → (delay, reply) table.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeSearch {
    pub replies: Mutex<HashMap<String, (Duration, Option<Value>)>>,
    pub queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSearch {
    pub fn reply(&self, query: &str, delay_ms: u64, body: Option<Value>) {
        self.replies
            .lock()
            .unwrap()
            .insert(query.to_string(), (Duration::from_millis(delay_ms), body));
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str) -> Result<Value, AppError> {
        self.queries.lock().unwrap().push(query.to_string());
        let reply = self.replies.lock().unwrap().get(query).cloned();
        match reply {
            Some((delay, body)) => {
                tokio::time::sleep(delay).await;
                body.ok_or_else(|| AppError::SearchApi("HTTP 500".to_string()))
            }
            None => Err(AppError::SearchApi("HTTP 404".to_string())),
        }
    }
}

/// Build a spotlight response with two sides and scalar scores.
#[allow(dead_code)]
pub fn spotlight(team1: &str, score1: &str, team2: &str, score2: &str) -> Value {
    serde_json::json!({
        "sports_results": {
            "game_spotlight": {
                "teams": [
                    { "name": team1, "score": score1, "thumbnail": format!("https://img/{}.png", team1) },
                    { "name": team2, "score": score2, "thumbnail": format!("https://img/{}.png", team2) }
                ]
            }
        }
    })
}

// ─── Store wrapper with failure injection ───────────────────────────────

/// Memory store whose reads and writes can be switched off.
#[derive(Default)]
#[allow(dead_code)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl TeamRepository for FlakyStore {
    async fn add_team(&self, team: &TeamSelection) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database("unavailable".to_string()));
        }
        self.inner.add_team(team).await
    }

    async fn teams_for_user(&self, user_id: &str) -> Result<Vec<TeamSelection>, AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Database("unavailable".to_string()));
        }
        self.inner.teams_for_user(user_id).await
    }

    async fn put_user_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database("unavailable".to_string()));
        }
        self.inner.put_user_profile(user_id, profile).await
    }
}

// ─── App harness ─────────────────────────────────────────────────────────

#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub identity: Arc<FakeIdentity>,
    pub store: Arc<FlakyStore>,
    pub search: Arc<FakeSearch>,
}

/// Create a test app with fake collaborators.
#[allow(dead_code)]
pub fn create_test_app(identity: FakeIdentity) -> TestApp {
    let identity = Arc::new(identity);
    let store = Arc::new(FlakyStore::default());
    let search = Arc::new(FakeSearch::default());

    let mut config = Config::test_default();
    config.search_timeout = Duration::from_millis(300);

    let state = Arc::new(AppState::new(
        config,
        identity.clone(),
        store.clone(),
        search.clone(),
    ));

    TestApp {
        router: create_router(state.clone()),
        state,
        identity,
        store,
        search,
    }
}

/// Create a test app with one signed-in user (`uid-fan`).
#[allow(dead_code)]
pub async fn create_signed_in_app() -> TestApp {
    let app = create_test_app(FakeIdentity::with_account("fan@example.com", "hunter22"));
    app.identity
        .sign_in("fan@example.com", "hunter22")
        .await
        .expect("sign in");
    app
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
