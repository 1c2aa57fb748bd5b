//! Contest pages and actions

mod handler;
pub mod request;
pub mod response;


pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contest", get(handler::contests_view))
        .route("/contest/getContests.action", get(handler::get_contests_action))
        .route("/contest/{contest_id}", get(handler::contest_view))
        .route(
            "/contest/{contest_id}/attend.action",
            post(handler::attend_contest_action),
        )
        .route("/contest/{contest_id}/leaderboard", get(handler::leaderboard_view))
}
