//! Session stores

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};
use tokio::sync::RwLock;
use tracing::warn;

use super::SessionData;
use crate::{constants::SESSION_KEY_PREFIX, error::AppResult};

/// Backend holding session data between requests
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a live session, `None` if unknown or expired
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>>;

    /// Store a session, replacing any previous data and resetting its lifetime
    async fn save(&self, id: &str, data: &SessionData, ttl: Duration) -> AppResult<()>;

    /// Restart the lifetime of a live session without rewriting it.
    /// Unknown or expired sessions are left alone.
    async fn touch(&self, id: &str, ttl: Duration) -> AppResult<()>;
}

/// Decode stored session data; data that no longer decodes counts as no session
fn decode_session(id: &str, raw: &str) -> Option<SessionData> {
    match serde_json::from_str(raw) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(session_id = %id, error = %e, "Discarding undecodable session data");
            None
        }
    }
}

/// Redis-backed sessions, shared by every instance of the host
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Open a managed connection to `url`
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self::new(conn))
    }

    fn key(id: &str) -> String {
        format!("{SESSION_KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(Self::key(id)).await?;

        Ok(raw.and_then(|raw| decode_session(id, &raw)))
    }

    async fn save(&self, id: &str, data: &SessionData, ttl: Duration) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let raw = serde_json::to_string(data)?;
        let _: () = conn.set_ex(Self::key(id), raw, ttl.as_secs().max(1)).await?;
        Ok(())
    }

    async fn touch(&self, id: &str, ttl: Duration) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("EXPIRE")
            .arg(Self::key(id))
            .arg(ttl.as_secs().max(1))
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}

/// Process-local sessions
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, (SessionData, Instant)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Time left before `id` expires, `None` if it is unknown
    pub async fn remaining_ttl(&self, id: &str) -> Option<Duration> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .and_then(|(_, expires_at)| expires_at.checked_duration_since(Instant::now()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(id)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(data, _)| data.clone()))
    }

    async fn save(&self, id: &str, data: &SessionData, ttl: Duration) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        sessions.retain(|_, (_, expires_at)| *expires_at > now);
        sessions.insert(id.to_string(), (data.clone(), now + ttl));
        Ok(())
    }

    async fn touch(&self, id: &str, ttl: Duration) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        if let Some((_, expires_at)) = sessions.get_mut(id) {
            if *expires_at > now {
                *expires_at = now + ttl;
            }
        }
        Ok(())
    }
}
