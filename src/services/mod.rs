// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod enrichment;
pub mod firebase_auth;
pub mod identity;
pub mod scores;
pub mod search;
pub mod session;

pub use enrichment::MatchEnricher;
pub use firebase_auth::FirebaseAuth;
pub use identity::{AuthError, IdentityProvider, SessionCallback, SubscriberSet, Subscription};
pub use scores::ScoreExtractors;
pub use search::{SearchProvider, SerpApiClient};
pub use session::SessionListener;
