//! Leaderboard models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Submission, User};

/// A user's participation record in a contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestContestant {
    pub contest_id: i64,
    pub contestant: User,
    /// Points in OI mode, solved count in ACM mode
    pub score: i64,
    /// Penalty time in ACM mode
    pub time: i64,
    pub rank: i64,
}

/// Ranked contestants plus their submissions, keyed by uid then problem id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderBoard {
    pub contestants: Vec<ContestContestant>,
    pub submissions: BTreeMap<i64, BTreeMap<i64, Submission>>,
}
