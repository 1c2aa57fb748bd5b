//! Contest request DTOs

use serde::Deserialize;

/// Query of the contest list page
#[derive(Debug, Deserialize)]
pub struct ContestsQuery {
    pub keyword: Option<String>,
}

/// Query of `getContests.action`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContestsQuery {
    pub keyword: Option<String>,
    /// Index of the first contest to load
    pub start_index: i64,
}

/// Form of `attend.action`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendContestForm {
    pub csrf_token: String,
}
