//! 세션 키 → 토큰 매핑 저장소
//!
//! 쿠키에 담기는 세션 키는 원문 그대로 저장하지 않고 SHA-256 해시를 키로 사용합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::redis::RedisClient;
use crate::errors::AppResult;

/// 세션 저장소에 보관되는 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session_key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()>;

    async fn find(&self, session_key: &str) -> AppResult<Option<SessionRecord>>;

    async fn remove(&self, session_key: &str) -> AppResult<()>;
}

fn storage_key(session_key: &str) -> String {
    format!("session:{:x}", Sha256::digest(session_key.as_bytes()))
}

pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session_key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&storage_key(session_key), record, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn find(&self, session_key: &str) -> AppResult<Option<SessionRecord>> {
        Ok(self.redis.get(&storage_key(session_key)).await?)
    }

    async fn remove(&self, session_key: &str) -> AppResult<()> {
        self.redis.del(&storage_key(session_key)).await?;
        Ok(())
    }
}

/// 테스트용 인메모리 저장소 (TTL 무시)
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, SessionRecord>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session_key: &str, record: &SessionRecord, _ttl_seconds: u64) -> AppResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(storage_key(session_key), record.clone());
        Ok(())
    }

    async fn find(&self, session_key: &str) -> AppResult<Option<SessionRecord>> {
        Ok(self.entries.lock().unwrap().get(&storage_key(session_key)).cloned())
    }

    async fn remove(&self, session_key: &str) -> AppResult<()> {
        self.entries.lock().unwrap().remove(&storage_key(session_key));
        Ok(())
    }
}
