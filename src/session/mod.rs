//! Per-client session state
//!
//! A session carries the signed-in user (if any) and the current
//! anti-forgery token. [`session_middleware`] loads it from the configured
//! [`SessionStore`] before the handler runs and persists it afterwards.

mod middleware;
mod store;

pub use middleware::{session_id_from_headers, session_middleware};
pub use store::{MemorySessionStore, RedisSessionStore, SessionStore};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, models::User};

/// Persisted session contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user: Option<User>,
    pub csrf_token: Option<String>,
}

/// Handle to the session of the current request
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    inner: Arc<Mutex<SessionInner>>,
}

#[derive(Debug)]
struct SessionInner {
    data: SessionData,
    modified: bool,
}

impl Session {
    /// Wrap data loaded from a store
    pub fn new(id: impl Into<String>, data: SessionData) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(Mutex::new(SessionInner {
                data,
                modified: false,
            })),
        }
    }

    /// Empty session with a new random id
    pub fn fresh() -> Self {
        Self::new(Uuid::new_v4().simple().to_string(), SessionData::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock().data.user.clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        let mut inner = self.lock();
        inner.data.user = user;
        inner.modified = true;
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.lock().data.csrf_token.clone()
    }

    pub fn set_csrf_token(&self, token: String) {
        let mut inner = self.lock();
        inner.data.csrf_token = Some(token);
        inner.modified = true;
    }

    /// Whether the session changed since it was loaded
    pub fn is_modified(&self) -> bool {
        self.lock().modified
    }

    pub fn snapshot(&self) -> SessionData {
        self.lock().data.clone()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // The data stays consistent even if a holder panicked mid-request
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Session("session middleware is not installed".to_string()))
    }
}

/// Signed-in user of the current session, `None` for anonymous clients
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(CurrentUser(session.current_user()))
    }
}
