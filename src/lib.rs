//! Contests Web - HTTP layer for online judge contests
//!
//! This library provides the request/response glue of the contest pages of
//! an online judge: listing contests, contest detail pages, attending a
//! contest and the OI / ACM leaderboards.
//!
//! # Architecture
//!
//! - **Handlers**: extract parameters, resolve the session and shape responses
//! - **Services**: the [`services::ContestService`] collaborator, supplied by the host
//! - **Session**: per-client user and anti-forgery token, stored in Redis or memory
//! - **View**: typed view models handed to a pluggable renderer
//!
//! # Example
//!
//! ```rust,ignore
//! let config = Config::from_env()?;
//! contests_web::telemetry::init_tracing(&config.server)?;
//!
//! let sessions = RedisSessionStore::connect(&config.redis.url).await?;
//! let state = AppState::new(
//!     Arc::new(my_contest_service),
//!     Arc::new(sessions),
//!     Arc::new(JsonViewRenderer),
//!     config,
//! );
//!
//! let listener = TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(
//!     listener,
//!     create_router(state).into_make_service_with_connect_info::<SocketAddr>(),
//! )
//! .await?;
//! ```

pub mod config;
pub mod constants;
pub mod csrf;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::Router;
use tower_http::trace::TraceLayer;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the router with session handling and request logging installed
pub fn create_router(state: AppState) -> Router {
    handlers::routes()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session::session_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
