//! Test utilities: a recording contest service, an in-process app and
//! lazily started containers

pub mod containers {
    use std::sync::OnceLock;
    use testcontainers::{ContainerAsync, runners::AsyncRunner};
    use testcontainers_modules::redis::Redis;

    static REDIS: OnceLock<ContainerAsync<Redis>> = OnceLock::new();

    /// Get or start a Redis container (lazy initialization)
    pub async fn get_redis() -> &'static ContainerAsync<Redis> {
        if REDIS.get().is_none() {
            let container = Redis::default()
                .start()
                .await
                .expect("Failed to start Redis container");

            let _ = REDIS.set(container);
        }
        REDIS.get().unwrap()
    }

    /// Get Redis connection URL from the container
    pub async fn redis_url() -> String {
        let container = get_redis().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(6379).await.unwrap();
        format!("redis://{}:{}", host, port)
    }
}

pub mod stub {
    use std::{
        collections::BTreeMap,
        sync::{Arc, Mutex},
    };

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use crate::{
        error::{AppError, AppResult},
        models::{
            AttendanceResult, Contest, ContestContestant, ContestSubmission, LeaderBoard, Problem,
            Submission, User,
        },
        services::ContestService,
    };

    /// A collaborator call, with users reduced to their uid
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        GetContests {
            keyword: Option<String>,
            start_index: i64,
            limit: usize,
        },
        GetContest(i64),
        IsAttendContest(i64, Option<i64>),
        NumberOfContestants(i64),
        GetProblems(Vec<i64>),
        GetSubmissions(i64, Option<i64>),
        AttendContest {
            contest_id: i64,
            uid: Option<i64>,
            is_csrf_token_valid: bool,
        },
        LeaderBoardOi(i64),
        LeaderBoardAcm(i64),
    }

    /// In-memory contest service that records every call
    #[derive(Default)]
    pub struct StubContestService {
        pub contests: Vec<Contest>,
        pub problems: Vec<Problem>,
        pub is_attended: bool,
        pub number_of_contestants: i64,
        pub submissions: BTreeMap<i64, ContestSubmission>,
        pub attendance: AttendanceResult,
        pub oi_board: LeaderBoard,
        pub acm_board: LeaderBoard,
        /// Calls matching this predicate fail after being recorded
        pub fail_when: Option<fn(&Call) -> bool>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl StubContestService {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn into_shared(self) -> Arc<Self> {
            Arc::new(self)
        }

        /// Make every call matching `predicate` return an internal error
        pub fn failing_on(mut self, predicate: fn(&Call) -> bool) -> Self {
            self.fail_when = Some(predicate);
            self
        }

        fn record(&self, call: Call) -> AppResult<()> {
            let fails = self.fail_when.is_some_and(|predicate| predicate(&call));
            self.calls.lock().unwrap().push(call);
            if fails {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "contest service unavailable"
                )));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ContestService for StubContestService {
        async fn get_contests(
            &self,
            keyword: Option<&str>,
            start_index: i64,
            limit: usize,
        ) -> AppResult<Vec<Contest>> {
            self.record(Call::GetContests {
                keyword: keyword.map(str::to_string),
                start_index,
                limit,
            })?;
            Ok(self
                .contests
                .iter()
                .filter(|c| keyword.is_none_or(|k| c.contest_name.contains(k)))
                .skip(start_index.max(0) as usize)
                .take(limit)
                .cloned()
                .collect())
        }

        async fn get_contest(&self, contest_id: i64) -> AppResult<Option<Contest>> {
            self.record(Call::GetContest(contest_id))?;
            Ok(self
                .contests
                .iter()
                .find(|c| c.contest_id == contest_id)
                .cloned())
        }

        async fn is_attend_contest(&self, contest_id: i64, user: Option<&User>) -> AppResult<bool> {
            self.record(Call::IsAttendContest(contest_id, user.map(|u| u.uid)))?;
            Ok(user.is_some() && self.is_attended)
        }

        async fn get_number_of_contestants_of_contest(&self, contest_id: i64) -> AppResult<i64> {
            self.record(Call::NumberOfContestants(contest_id))?;
            Ok(self.number_of_contestants)
        }

        async fn get_problems_of_contests(&self, problem_ids: &[i64]) -> AppResult<Vec<Problem>> {
            self.record(Call::GetProblems(problem_ids.to_vec()))?;
            Ok(self
                .problems
                .iter()
                .filter(|p| problem_ids.contains(&p.problem_id))
                .cloned()
                .collect())
        }

        async fn get_submissions_of_contestant_of_contest(
            &self,
            contest_id: i64,
            user: Option<&User>,
        ) -> AppResult<BTreeMap<i64, ContestSubmission>> {
            self.record(Call::GetSubmissions(contest_id, user.map(|u| u.uid)))?;
            match user {
                Some(_) => Ok(self.submissions.clone()),
                None => Ok(BTreeMap::new()),
            }
        }

        async fn attend_contest(
            &self,
            contest_id: i64,
            user: Option<&User>,
            is_csrf_token_valid: bool,
        ) -> AppResult<AttendanceResult> {
            self.record(Call::AttendContest {
                contest_id,
                uid: user.map(|u| u.uid),
                is_csrf_token_valid,
            })?;
            Ok(self.attendance.clone())
        }

        async fn get_leader_board_for_oi(&self, contest_id: i64) -> AppResult<LeaderBoard> {
            self.record(Call::LeaderBoardOi(contest_id))?;
            Ok(self.oi_board.clone())
        }

        async fn get_leader_board_for_acm(&self, contest_id: i64) -> AppResult<LeaderBoard> {
            self.record(Call::LeaderBoardAcm(contest_id))?;
            Ok(self.acm_board.clone())
        }
    }

    pub fn user(uid: i64, username: &str) -> User {
        User {
            uid,
            username: username.to_string(),
            user_group: "users".to_string(),
        }
    }

    /// Contest that started `started_hours_ago` hours ago (negative: in the future)
    pub fn contest(contest_id: i64, mode: &str, started_hours_ago: i64) -> Contest {
        let start_time = Utc::now() - Duration::hours(started_hours_ago);
        Contest {
            contest_id,
            contest_name: format!("Contest #{contest_id}"),
            contest_notes: None,
            start_time,
            end_time: start_time + Duration::hours(5),
            contest_mode: mode.to_string(),
            problems: "[1000, 1001]".to_string(),
        }
    }

    pub fn problem(problem_id: i64) -> Problem {
        Problem {
            problem_id,
            problem_name: format!("Problem {problem_id}"),
            time_limit_ms: 1000,
            memory_limit_kb: 65536,
            total_submission: 10,
            accepted_submission: 4,
        }
    }

    pub fn submission(submission_id: i64, uid: i64, problem_id: i64, judge_result: &str) -> Submission {
        Submission {
            submission_id,
            problem_id,
            uid,
            language: "cpp".to_string(),
            judge_result: judge_result.to_string(),
            used_time_ms: Some(12),
            used_memory_kb: Some(1024),
            submit_time: Utc::now(),
        }
    }

    /// Leaderboard with a single contestant who solved problem 1000
    pub fn leaderboard(contest_id: i64, contestant: User, score: i64) -> LeaderBoard {
        let uid = contestant.uid;
        LeaderBoard {
            contestants: vec![ContestContestant {
                contest_id,
                contestant,
                score,
                time: 0,
                rank: 1,
            }],
            submissions: BTreeMap::from([(
                uid,
                BTreeMap::from([(1000, submission(1, uid, 1000, "AC"))]),
            )]),
        }
    }
}

pub mod capture {
    use std::{
        collections::BTreeMap,
        fmt,
        sync::{Arc, Mutex},
    };

    use tracing::{
        Event, Subscriber,
        field::{Field, Visit},
    };
    use tracing_subscriber::{Layer, layer::Context};

    /// One recorded tracing event
    #[derive(Debug, Clone)]
    pub struct CapturedEvent {
        pub target: String,
        pub fields: BTreeMap<String, String>,
    }

    /// Layer recording every event it sees
    #[derive(Debug, Clone, Default)]
    pub struct CapturedEvents(Arc<Mutex<Vec<CapturedEvent>>>);

    impl CapturedEvents {
        pub fn with_target(&self, target: &str) -> Vec<CapturedEvent> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.target == target)
                .cloned()
                .collect()
        }
    }

    #[derive(Default)]
    struct FieldVisitor(BTreeMap<String, String>);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: Subscriber> Layer<S> for CapturedEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.0.lock().unwrap().push(CapturedEvent {
                target: event.metadata().target().to_string(),
                fields: visitor.0,
            });
        }
    }
}

pub mod test_app {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{HeaderMap, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::stub::StubContestService;
    use crate::{
        config::Config,
        session::{MemorySessionStore, SessionStore},
        state::AppState,
        view::JsonViewRenderer,
    };

    /// Router backed by `service`, a memory session store and the JSON renderer
    pub fn create_test_app(service: Arc<StubContestService>) -> (Router, Arc<MemorySessionStore>) {
        create_test_app_with_config(service, Config::default())
    }

    pub fn create_test_app_with_config(
        service: Arc<StubContestService>,
        config: Config,
    ) -> (Router, Arc<MemorySessionStore>) {
        let sessions = Arc::new(MemorySessionStore::new());
        (build_app(service, sessions.clone(), config), sessions)
    }

    /// Router over an arbitrary session store
    pub fn build_app(
        service: Arc<StubContestService>,
        sessions: Arc<dyn SessionStore>,
        config: Config,
    ) -> Router {
        let state = AppState::new(service, sessions, Arc::new(JsonViewRenderer), config);
        crate::create_router(state)
    }

    /// Send one request and decode the JSON body (`Null` when empty or not JSON)
    pub async fn send(
        app: &Router,
        request: Request<Body>,
    ) -> (StatusCode, HeaderMap, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, headers, body)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }
}
