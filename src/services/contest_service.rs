//! Contest service
//!
//! The HTTP layer does not own any contest logic. Listing, attendance rules
//! and leaderboard ranking all live behind this trait; the host injects an
//! implementation through [`crate::AppState`].

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{AttendanceResult, Contest, ContestSubmission, LeaderBoard, Problem, User},
};

/// Contest collaborator consumed by the contest handlers
#[async_trait]
pub trait ContestService: Send + Sync {
    /// Contests matching `keyword`, starting at `start_index`, at most `limit` entries
    async fn get_contests(
        &self,
        keyword: Option<&str>,
        start_index: i64,
        limit: usize,
    ) -> AppResult<Vec<Contest>>;

    /// Contest by id, `None` if it does not exist
    async fn get_contest(&self, contest_id: i64) -> AppResult<Option<Contest>>;

    /// Whether `user` attends the contest; anonymous users never do
    async fn is_attend_contest(&self, contest_id: i64, user: Option<&User>) -> AppResult<bool>;

    async fn get_number_of_contestants_of_contest(&self, contest_id: i64) -> AppResult<i64>;

    /// Problems for the given ids
    async fn get_problems_of_contests(&self, problem_ids: &[i64]) -> AppResult<Vec<Problem>>;

    /// The user's latest submission per problem id
    async fn get_submissions_of_contestant_of_contest(
        &self,
        contest_id: i64,
        user: Option<&User>,
    ) -> AppResult<BTreeMap<i64, ContestSubmission>>;

    /// Register `user` for the contest.
    ///
    /// The service decides what an invalid anti-forgery token, a missing
    /// user or a closed contest means; the handler only reports the verdict.
    async fn attend_contest(
        &self,
        contest_id: i64,
        user: Option<&User>,
        is_csrf_token_valid: bool,
    ) -> AppResult<AttendanceResult>;

    /// Leaderboard ranked by points
    async fn get_leader_board_for_oi(&self, contest_id: i64) -> AppResult<LeaderBoard>;

    /// Leaderboard ranked by solved count and penalty
    async fn get_leader_board_for_acm(&self, contest_id: i64) -> AppResult<LeaderBoard>;
}
