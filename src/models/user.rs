//! User model

use std::fmt;

use serde::{Deserialize, Serialize};

/// User resolved from the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: i64,
    pub username: String,
    pub user_group: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User [uid={}, username={}]", self.uid, self.username)
    }
}
