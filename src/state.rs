//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config, services::ContestService, session::SessionStore, view::ViewRenderer,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Contest collaborator supplied by the host
    contests: Arc<dyn ContestService>,

    /// Session backend
    sessions: Arc<dyn SessionStore>,

    /// Page renderer
    renderer: Arc<dyn ViewRenderer>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        contests: Arc<dyn ContestService>,
        sessions: Arc<dyn SessionStore>,
        renderer: Arc<dyn ViewRenderer>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                contests,
                sessions,
                renderer,
                config,
            }),
        }
    }

    /// Get the contest service
    pub fn contests(&self) -> &dyn ContestService {
        self.inner.contests.as_ref()
    }

    /// Get the session store
    pub fn sessions(&self) -> &dyn SessionStore {
        self.inner.sessions.as_ref()
    }

    /// Get the view renderer
    pub fn renderer(&self) -> &dyn ViewRenderer {
        self.inner.renderer.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
