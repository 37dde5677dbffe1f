//! Access-token session storage in Redis.

use crate::pool::{RedisPool, RedisResult};
use serde::{Deserialize, Serialize};

/// Key prefix for session records
const SESSION_PREFIX: &str = "session:";

/// Key prefix for the per-user set of session ids
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Stored session data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// User the session was issued to
    pub user_id: i64,
    /// Creation timestamp (Unix epoch seconds)
    pub created_at: i64,
    /// IP address at login (optional)
    pub ip_address: Option<String>,
}

impl SessionData {
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
            ip_address: None,
        }
    }

    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}

/// Session store backing login, logout, and token validation
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create with custom TTL, normally the access-token lifetime
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    fn user_key(user_id: i64) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }

    /// Store a new session
    pub async fn create(&self, session_id: &str, data: &SessionData) -> RedisResult<()> {
        self.pool
            .put_record(&Self::key(session_id), data, self.ttl_seconds)
            .await?;
        self.pool
            .index_add(&Self::user_key(data.user_id), session_id, self.ttl_seconds)
            .await?;

        tracing::debug!(
            session_id = %session_id,
            user_id = data.user_id,
            "Stored session"
        );

        Ok(())
    }

    /// Load a session; `None` once revoked or expired
    pub async fn get(&self, session_id: &str) -> RedisResult<Option<SessionData>> {
        self.pool.get_record(&Self::key(session_id)).await
    }

    /// Revoke one session (logout)
    pub async fn revoke(&self, session_id: &str) -> RedisResult<bool> {
        if let Some(data) = self.get(session_id).await? {
            self.pool
                .index_remove(&Self::user_key(data.user_id), session_id)
                .await?;
        }

        let deleted = self.pool.delete_keys(&[Self::key(session_id)]).await? > 0;
        if deleted {
            tracing::debug!(session_id = %session_id, "Revoked session");
        }

        Ok(deleted)
    }

    /// Revoke every session of a user
    pub async fn revoke_all_for_user(&self, user_id: i64) -> RedisResult<usize> {
        let user_key = Self::user_key(user_id);
        let session_ids = self.pool.index_members(&user_key).await?;

        let mut keys: Vec<String> = session_ids.iter().map(|id| Self::key(id)).collect();
        keys.push(user_key);
        self.pool.delete_keys(&keys).await?;

        tracing::info!(
            user_id = user_id,
            count = session_ids.len(),
            "Revoked all sessions for user"
        );

        Ok(session_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_data_creation() {
        let data = SessionData::new(42).with_ip_address("192.168.1.1");

        assert_eq!(data.user_id, 42);
        assert_eq!(data.ip_address.as_deref(), Some("192.168.1.1"));
        assert!(data.created_at > 0);
    }

    #[test]
    fn test_key_generation() {
        assert_eq!(SessionStore::key("abc123"), "session:abc123");
        assert_eq!(SessionStore::user_key(7), "user_sessions:7");
    }

    #[test]
    fn test_session_data_json() {
        let data = SessionData::new(9);
        let json = serde_json::to_string(&data).unwrap();
        let back: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
