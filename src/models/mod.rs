//! Domain models
//!
//! These are the shapes the contest service hands to the HTTP layer. The
//! handlers only pass them through into view models and JSON maps.

pub mod attendance;
pub mod contest;
pub mod leaderboard;
pub mod problem;
pub mod submission;
pub mod user;

pub use attendance::*;
pub use contest::*;
pub use leaderboard::*;
pub use problem::*;
pub use submission::*;
pub use user::*;
