//! Problem model

use serde::{Deserialize, Serialize};

/// Problem attached to a contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub problem_id: i64,
    pub problem_name: String,
    pub time_limit_ms: i64,
    pub memory_limit_kb: i64,
    pub total_submission: i64,
    pub accepted_submission: i64,
}
