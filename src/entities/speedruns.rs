use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the per-game ranking query, joined with users, categories and
/// platforms. `status` and `time` come back raw; normalization into typed
/// values happens in the model conversion.
#[derive(Debug, FromRow)]
pub struct RankedRun {
    pub speedrun_id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub category_id: i64,
    pub platform_id: i64,
    pub username: String,
    #[sqlx(default)]
    pub avatar: Option<String>,
    pub time: String,
    pub category_name: String,
    pub platform_name: String,
    #[sqlx(default)]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    pub status: Option<String>,
}

/// A run as shown on the submitter's profile (joined display fields, no
/// ranking context).
#[derive(Debug, FromRow)]
pub struct UserRun {
    pub speedrun_id: i64,
    pub game_title: String,
    pub category_name: String,
    pub time: String,
    #[sqlx(default)]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    pub status: Option<String>,
}

/// The foreign keys captured before a delete so the aggregate counters can
/// be decremented afterwards.
#[derive(Debug, FromRow)]
pub struct DoomedRun {
    pub game_id: i64,
    pub user_id: i64,
}
