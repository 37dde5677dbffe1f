//! # jobboard-cache
//!
//! Redis layer holding the server side of bearer-token sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: One record per issued token, revocable one at a
//!   time (logout) or all at once (account deletion)
//!
//! ## Example
//!
//! ```ignore
//! use jobboard_cache::{RedisPool, RedisPoolConfig, SessionData, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = SessionStore::with_ttl(pool, 3600);
//!
//! sessions.create(&session_id, &SessionData::new(user_id)).await?;
//! assert!(sessions.get(&session_id).await?.is_some());
//! sessions.revoke(&session_id).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{SessionData, SessionStore};
