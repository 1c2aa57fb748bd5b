//! Server-rendered views
//!
//! Handlers describe a page as a [`Template`] plus a typed view model and
//! leave the markup to the [`ViewRenderer`] configured in [`AppState`].
//!
//! [`AppState`]: crate::AppState

use axum::{
    Json,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    constants::{VIEW_TEMPLATE_HEADER, templates},
    error::AppResult,
    models::ContestMode,
};

/// Page templates served by the contest handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Contests,
    Contest,
    LeaderboardOi,
    LeaderboardAcm,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Contests => templates::CONTESTS,
            Self::Contest => templates::CONTEST,
            Self::LeaderboardOi => templates::LEADERBOARD_OI,
            Self::LeaderboardAcm => templates::LEADERBOARD_ACM,
        }
    }

    /// Leaderboard template for a contest mode
    pub fn leaderboard(mode: ContestMode) -> Self {
        match mode {
            ContestMode::Oi => Self::LeaderboardOi,
            ContestMode::Acm => Self::LeaderboardAcm,
        }
    }
}

/// A template together with its view model
#[derive(Debug)]
pub struct View<M> {
    pub template: Template,
    pub model: M,
}

impl<M: Serialize> View<M> {
    pub fn new(template: Template, model: M) -> Self {
        Self { template, model }
    }

    pub fn render(self, renderer: &dyn ViewRenderer) -> AppResult<Response> {
        let model = serde_json::to_value(&self.model)?;
        renderer.render(self.template, model)
    }
}

/// Turns a view model into a response
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: Template, model: serde_json::Value) -> AppResult<Response>;
}

/// Renders views as `{"template": ..., "model": ...}` JSON documents,
/// for hosts that render pages client-side
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(&self, template: Template, model: serde_json::Value) -> AppResult<Response> {
        let body = serde_json::json!({
            "template": template.name(),
            "model": model,
        });

        Ok((
            [(
                HeaderName::from_static(VIEW_TEMPLATE_HEADER),
                HeaderValue::from_static(template.name()),
            )],
            Json(body),
        )
            .into_response())
    }
}
