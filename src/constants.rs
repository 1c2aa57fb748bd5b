//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default log filter when neither `RUST_LOG` nor the config provides one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Whether `X-Forwarded-For` / `X-Real-IP` are trusted by default
pub const DEFAULT_TRUST_FORWARDED_HEADERS: bool = false;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Default name of the session cookie
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "CONTEST_SESSION";

/// Default session lifetime in seconds (30 minutes)
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 30 * 60;

/// Default Redis URL for the session store
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Key prefix for sessions stored in Redis
pub const SESSION_KEY_PREFIX: &str = "session:";

/// Length of generated anti-forgery tokens
pub const CSRF_TOKEN_LENGTH: usize = 32;

// =============================================================================
// CONTEST SETTINGS
// =============================================================================

/// Number of contests loaded per page (first page and each `getContests.action` call)
pub const NUMBER_OF_CONTESTS_PER_PAGE: usize = 10;

/// Contest mode identifiers as stored by the contest service
pub mod contest_modes {
    pub const OI: &str = "OI";
    pub const ACM: &str = "ACM";

    /// All recognized contest modes
    pub const ALL: &[&str] = &[OI, ACM];
}

/// View template names
pub mod templates {
    pub const CONTESTS: &str = "contests/contests";
    pub const CONTEST: &str = "contests/contest";
    pub const LEADERBOARD_OI: &str = "contests/leaderboard-oi";
    pub const LEADERBOARD_ACM: &str = "contests/leaderboard-acm";
}

/// Tracing target for audit events
pub const AUDIT_TARGET: &str = "audit";

/// Response header carrying the template name for JSON-rendered views
pub const VIEW_TEMPLATE_HEADER: &str = "x-view-template";
