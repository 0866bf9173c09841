//! User profile model for storage.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore at `users/{uid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name entered at registration
    pub name: String,
    /// Email address used to register
    pub email: String,
}
