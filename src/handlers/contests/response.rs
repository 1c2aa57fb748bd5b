//! Contest view models and response DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Contest, ContestContestant, ContestSubmission, Problem, Submission};

/// Model of the contest list page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestsPage {
    pub contests: Vec<Contest>,
    pub current_time: DateTime<Utc>,
}

/// Body of `getContests.action`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestsListResponse {
    /// Whether this page contains any contest
    pub is_successful: bool,
    pub contests: Vec<Contest>,
}

/// Model of the contest detail page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestPage {
    pub current_time: DateTime<Utc>,
    pub contest: Contest,
    pub problems: Vec<Problem>,
    /// Current user's submissions keyed by problem id
    pub submissions: BTreeMap<i64, ContestSubmission>,
    pub is_attended: bool,
    pub number_of_contestants: i64,
    pub csrf_token: String,
}

/// Model of both leaderboard pages
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub contestants: Vec<ContestContestant>,
    /// Submissions keyed by contestant uid, then problem id
    pub submissions: BTreeMap<i64, BTreeMap<i64, Submission>>,
    pub contest: Contest,
    pub problems: Vec<Problem>,
}
