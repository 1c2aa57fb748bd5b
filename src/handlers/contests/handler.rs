//! Contest handler implementations

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Response,
};
use tracing::{debug, info};

use crate::{
    constants::{AUDIT_TARGET, NUMBER_OF_CONTESTS_PER_PAGE},
    csrf::CsrfProtector,
    error::{AppError, AppResult},
    middleware::ClientIp,
    models::{AttendanceResult, ContestMode, LeaderBoard},
    session::{CurrentUser, Session},
    state::AppState,
    utils::now_utc,
    view::{Template, View},
};

use super::{
    request::{AttendContestForm, ContestsQuery, GetContestsQuery},
    response::{ContestPage, ContestsListResponse, ContestsPage, LeaderboardPage},
};

/// GET /contest
///
/// First page of contests, optionally filtered by keyword.
pub async fn contests_view(
    State(state): State<AppState>,
    Query(query): Query<ContestsQuery>,
) -> AppResult<Response> {
    let contests = state
        .contests()
        .get_contests(query.keyword.as_deref(), 0, NUMBER_OF_CONTESTS_PER_PAGE)
        .await?;

    View::new(
        Template::Contests,
        ContestsPage {
            contests,
            current_time: now_utc(),
        },
    )
    .render(state.renderer())
}

/// GET /contest/getContests.action
///
/// Next page of contests for infinite scrolling. An empty page is reported
/// through `isSuccessful`, not as an error.
pub async fn get_contests_action(
    State(state): State<AppState>,
    Query(query): Query<GetContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    let contests = state
        .contests()
        .get_contests(
            query.keyword.as_deref(),
            query.start_index,
            NUMBER_OF_CONTESTS_PER_PAGE,
        )
        .await?;

    Ok(Json(ContestsListResponse {
        is_successful: !contests.is_empty(),
        contests,
    }))
}

/// GET /contest/{contest_id}
pub async fn contest_view(
    State(state): State<AppState>,
    Path(contest_id): Path<i64>,
    CurrentUser(current_user): CurrentUser,
    session: Session,
) -> AppResult<Response> {
    let service = state.contests();
    let contest = service
        .get_contest(contest_id)
        .await?
        .ok_or_else(|| AppError::contest_not_found(contest_id))?;

    let is_attended = service
        .is_attend_contest(contest_id, current_user.as_ref())
        .await?;
    let number_of_contestants = service
        .get_number_of_contestants_of_contest(contest_id)
        .await?;
    let problem_ids = contest.problem_ids()?;
    let problems = service.get_problems_of_contests(&problem_ids).await?;
    let submissions = service
        .get_submissions_of_contestant_of_contest(contest_id, current_user.as_ref())
        .await?;

    View::new(
        Template::Contest,
        ContestPage {
            current_time: now_utc(),
            contest,
            problems,
            submissions,
            is_attended,
            number_of_contestants,
            csrf_token: CsrfProtector::issue_token(&session),
        },
    )
    .render(state.renderer())
}

/// POST /contest/{contest_id}/attend.action
///
/// The contest service owns every attendance rule, including what an
/// invalid anti-forgery token means; its verdict is returned unchanged.
pub async fn attend_contest_action(
    State(state): State<AppState>,
    Path(contest_id): Path<i64>,
    CurrentUser(current_user): CurrentUser,
    session: Session,
    client_ip: ClientIp,
    Form(form): Form<AttendContestForm>,
) -> AppResult<Json<AttendanceResult>> {
    let is_csrf_token_valid = CsrfProtector::is_token_valid(&form.csrf_token, &session);

    let result = state
        .contests()
        .attend_contest(contest_id, current_user.as_ref(), is_csrf_token_valid)
        .await?;

    if result.is_successful {
        let user = current_user
            .as_ref()
            .map_or_else(|| "anonymous".to_string(), ToString::to_string);
        info!(
            target: AUDIT_TARGET,
            user = %user,
            contest_id,
            ip = %client_ip,
            "User attended contest"
        );
    } else {
        debug!(contest_id, is_csrf_token_valid, "Attendance rejected by contest service");
    }

    Ok(Json(result))
}

/// GET /contest/{contest_id}/leaderboard
///
/// Only contests that exist, have started and use a known mode have a
/// leaderboard; everything else is reported as not found.
pub async fn leaderboard_view(
    State(state): State<AppState>,
    Path(contest_id): Path<i64>,
) -> AppResult<Response> {
    let service = state.contests();
    let contest = service
        .get_contest(contest_id)
        .await?
        .ok_or_else(|| AppError::contest_not_found(contest_id))?;

    if !contest.has_started(now_utc()) {
        debug!(contest_id, start_time = %contest.start_time, "Leaderboard requested before start");
        return Err(AppError::contest_not_found(contest_id));
    }
    let mode = contest.mode().map_err(|e| {
        debug!(contest_id, error = %e, "Leaderboard requested for unknown mode");
        AppError::contest_not_found(contest_id)
    })?;

    let problem_ids = contest.problem_ids()?;
    let problems = service.get_problems_of_contests(&problem_ids).await?;

    let LeaderBoard {
        contestants,
        submissions,
    } = match mode {
        ContestMode::Oi => service.get_leader_board_for_oi(contest_id).await?,
        ContestMode::Acm => service.get_leader_board_for_acm(contest_id).await?,
    };

    View::new(
        Template::leaderboard(mode),
        LeaderboardPage {
            contestants,
            submissions,
            contest,
            problems,
        },
    )
    .render(state.renderer())
}
