//! Pooled Redis access for session records and per-user session indexes.

mod redis_pool;

pub use redis_pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};
