//! Anti-forgery tokens bound to the session

use crate::{
    constants::CSRF_TOKEN_LENGTH,
    session::Session,
    utils::{generate_secure_token, secrets_match},
};

/// Issues and checks anti-forgery tokens
pub struct CsrfProtector;

impl CsrfProtector {
    /// Generate a fresh token, bind it to the session and return it.
    /// Any previously issued token stops being valid.
    pub fn issue_token(session: &Session) -> String {
        let token = generate_secure_token(CSRF_TOKEN_LENGTH);
        session.set_csrf_token(token.clone());
        token
    }

    /// Whether `token` matches the one bound to the session
    pub fn is_token_valid(token: &str, session: &Session) -> bool {
        session
            .csrf_token()
            .is_some_and(|expected| secrets_match(token, &expected))
    }
}
