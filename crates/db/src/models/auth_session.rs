//! Refresh-token session model.
//!
//! Only the SHA-256 hash of a refresh token is stored; the plaintext is
//! handed to the client once and never persisted.

use lingo_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A refresh-token session row from the `auth_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AuthSession {
    /// A session is usable while unrevoked and unexpired.
    pub fn is_valid(&self, now: Timestamp) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}
