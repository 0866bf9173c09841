//! Database layer (Firestore, with an in-memory stand-in).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{TeamSelection, UserProfile};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Team selections, one document per add
    pub const SPORTS_TEAMS: &str = "sports_teams";
}

/// Document-store operations the app needs.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Store a new team selection as its own document.
    ///
    /// Stores that have their own clock stamp `created_at` with it; the
    /// value passed in is only a fallback.
    async fn add_team(&self, team: &TeamSelection) -> Result<(), AppError>;

    /// All team selections owned by `user_id`, in no particular order.
    async fn teams_for_user(&self, user_id: &str) -> Result<Vec<TeamSelection>, AppError>;

    /// Create or replace the profile document at `users/{user_id}`.
    async fn put_user_profile(&self, user_id: &str, profile: &UserProfile)
        -> Result<(), AppError>;
}
