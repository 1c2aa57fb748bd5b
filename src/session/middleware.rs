//! Session loading and persistence around each request

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::Session;
use crate::{error::AppError, state::AppState};

/// Resolve the session, expose it to handlers and persist it if it changed.
///
/// A session that cannot be loaded is replaced by a fresh one, so pages that
/// never look at the session keep working while the store is unavailable.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let config = &state.config().session;
    let store = state.sessions();

    let ttl = Duration::from_secs(config.ttl_seconds);

    let loaded = match session_id_from_headers(request.headers(), &config.cookie_name) {
        Some(id) => match store.load(&id).await {
            Ok(data) => data.map(|data| Session::new(id, data)),
            Err(e) => {
                warn!(session_id = %id, error = %e, "Failed to load session, starting a new one");
                None
            }
        },
        None => None,
    };
    // Unknown ids from the client are never adopted
    let is_new = loaded.is_none();
    let session = loaded.unwrap_or_else(Session::fresh);

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    if session.is_modified() {
        store.save(session.id(), &session.snapshot(), ttl).await?;

        if is_new {
            debug!(session_id = %session.id(), "Issued new session");
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                config.cookie_name,
                session.id()
            );
            let value =
                HeaderValue::from_str(&cookie).map_err(|e| AppError::Session(e.to_string()))?;
            response.headers_mut().append(SET_COOKIE, value);
        }
    } else if !is_new {
        // Idle time counts from the last request, not the last write
        if let Err(e) = store.touch(session.id(), ttl).await {
            warn!(session_id = %session.id(), error = %e, "Failed to refresh session lifetime");
        }
    }

    Ok(response)
}

/// Find the session id in the `Cookie` headers
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.trim_matches('"').to_string())
}
