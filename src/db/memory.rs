//! In-memory team repository for offline runs and tests.

use crate::db::TeamRepository;
use crate::error::AppError;
use crate::models::{TeamSelection, UserProfile};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-local store with the same contract as [`super::FirestoreDb`].
#[derive(Default)]
pub struct MemoryStore {
    teams: DashMap<String, Vec<TeamSelection>>,
    profiles: DashMap<String, UserProfile>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write operations accepted so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.get(user_id).map(|p| p.clone())
    }
}

#[async_trait]
impl TeamRepository for MemoryStore {
    async fn add_team(&self, team: &TeamSelection) -> Result<(), AppError> {
        self.teams
            .entry(team.user_id.clone())
            .or_default()
            .push(team.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn teams_for_user(&self, user_id: &str) -> Result<Vec<TeamSelection>, AppError> {
        Ok(self
            .teams
            .get(user_id)
            .map(|teams| teams.clone())
            .unwrap_or_default())
    }

    async fn put_user_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<(), AppError> {
        self.profiles.insert(user_id.to_string(), profile.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
