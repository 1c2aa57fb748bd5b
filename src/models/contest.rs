//! Contest model

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{constants::contest_modes, error::AppResult};

/// Contest as delivered by the contest service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub contest_id: i64,
    pub contest_name: String,
    pub contest_notes: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Raw mode string; see [`Contest::mode`]
    pub contest_mode: String,
    /// JSON array of problem ids, e.g. `[1000, 1001]`
    pub problems: String,
}

impl Contest {
    /// Parse the contest mode
    pub fn mode(&self) -> Result<ContestMode, UnknownContestMode> {
        self.contest_mode.parse()
    }

    /// Decode the serialized problem id list
    pub fn problem_ids(&self) -> AppResult<Vec<i64>> {
        Ok(serde_json::from_str(&self.problems)?)
    }

    /// Whether the contest has started at `now`
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now
    }
}

/// Scoring discipline of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContestMode {
    /// Points-based scoring
    #[serde(rename = "OI")]
    Oi,
    /// Solve count with time penalty
    #[serde(rename = "ACM")]
    Acm,
}

impl ContestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oi => contest_modes::OI,
            Self::Acm => contest_modes::ACM,
        }
    }
}

impl fmt::Display for ContestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode string outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contest mode: {0:?}")]
pub struct UnknownContestMode(pub String);

impl FromStr for ContestMode {
    type Err = UnknownContestMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            contest_modes::OI => Ok(Self::Oi),
            contest_modes::ACM => Ok(Self::Acm),
            other => Err(UnknownContestMode(other.to_string())),
        }
    }
}
