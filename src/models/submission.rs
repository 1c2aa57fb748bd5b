//! Submission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Judged submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: i64,
    pub problem_id: i64,
    pub uid: i64,
    pub language: String,
    /// Judge result slug, e.g. `AC`, `WA`, `TLE`
    pub judge_result: String,
    pub used_time_ms: Option<i64>,
    pub used_memory_kb: Option<i64>,
    pub submit_time: DateTime<Utc>,
}

/// A contestant's submission within a contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSubmission {
    pub contest_id: i64,
    pub submission: Submission,
}
