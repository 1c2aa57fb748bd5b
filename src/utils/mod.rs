//! Utility functions

pub mod crypto;
pub mod time;

pub use crypto::{generate_secure_token, secrets_match};
pub use time::now_utc;
