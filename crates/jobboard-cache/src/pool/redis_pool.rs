//! Redis pool behind the session store.
//!
//! Sessions live as JSON records that always expire, plus one set per user
//! indexing that user's live session ids. The helpers here cover exactly
//! those two shapes.

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    pub max_connections: usize,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
        }
    }
}

impl From<&jobboard_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &jobboard_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: (config.max_connections as usize).max(1),
        }
    }
}

impl RedisPoolConfig {
    /// Host part of the URL, without credentials, for logs
    #[must_use]
    pub fn redacted_url(&self) -> &str {
        self.url.split('@').next_back().unwrap_or(&self.url)
    }
}

/// Error type for Redis pool operations
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Pooled Redis connections
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl RedisPool {
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        tracing::info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// PING; used by the health and stats endpoints
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Store `record` as JSON under `key`, expiring after `ttl_seconds`
    pub async fn put_record<V: Serialize>(
        &self,
        key: &str,
        record: &V,
        ttl_seconds: u64,
    ) -> RedisResult<()> {
        let json = serde_json::to_string(record)?;
        let mut conn = self.get().await?;
        conn.set_ex::<_, _, ()>(key, json, ttl_seconds.max(1)).await?;
        Ok(())
    }

    /// Load a JSON record; `None` once deleted or expired
    pub async fn get_record<V: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<V>> {
        let mut conn = self.get().await?;
        let json: Option<String> = conn.get(key).await?;
        json.map(|v| serde_json::from_str(&v))
            .transpose()
            .map_err(Into::into)
    }

    /// Delete keys, returning how many existed
    pub async fn delete_keys(&self, keys: &[String]) -> RedisResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.get().await?;
        let deleted: usize = conn.del(keys).await?;
        Ok(deleted)
    }

    /// Add `member` to the index set and push the set's expiry out to `ttl_seconds`
    pub async fn index_add(&self, index: &str, member: &str, ttl_seconds: u64) -> RedisResult<()> {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX).max(1);
        let mut conn = self.get().await?;
        redis::pipe()
            .atomic()
            .sadd(index, member)
            .ignore()
            .expire(index, ttl)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    pub async fn index_remove(&self, index: &str, member: &str) -> RedisResult<()> {
        let mut conn = self.get().await?;
        conn.srem::<_, _, ()>(index, member).await?;
        Ok(())
    }

    pub async fn index_members(&self, index: &str) -> RedisResult<Vec<String>> {
        let mut conn = self.get().await?;
        let members: Vec<String> = conn.smembers(index).await?;
        Ok(members)
    }
}

/// Pool handle shared between the session store and health checks
pub type SharedRedisPool = Arc<RedisPool>;

pub fn create_shared_pool(config: RedisPoolConfig) -> RedisResult<SharedRedisPool> {
    Ok(Arc::new(RedisPool::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedisPoolConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn test_config_from_redis_config() {
        let redis_config = jobboard_common::RedisConfig {
            url: "redis://localhost:6380".to_string(),
            max_connections: 32,
        };
        let pool_config = RedisPoolConfig::from(&redis_config);
        assert_eq!(pool_config.url, "redis://localhost:6380");
        assert_eq!(pool_config.max_connections, 32);

        let empty = jobboard_common::RedisConfig {
            url: "redis://localhost:6380".to_string(),
            max_connections: 0,
        };
        assert_eq!(RedisPoolConfig::from(&empty).max_connections, 1);
    }

    #[test]
    fn test_redacted_url_hides_password() {
        let config = RedisPoolConfig {
            url: "redis://:hunter2@cache:6379/0".to_string(),
            max_connections: 4,
        };
        assert_eq!(config.redacted_url(), "cache:6379/0");
        assert_eq!(RedisPoolConfig::default().redacted_url(), "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_pool_builds_without_connecting() {
        // deadpool connects lazily, so building needs no server
        let pool = RedisPool::new(RedisPoolConfig::default());
        assert!(pool.is_ok());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let config = RedisPoolConfig {
            url: "not a url".to_string(),
            max_connections: 4,
        };
        assert!(matches!(
            RedisPool::new(config),
            Err(RedisPoolError::CreatePool(_))
        ));
    }
}
