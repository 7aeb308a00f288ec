use crate::common::error::AppError;
use crate::entities::speedruns::{RankedRun, UserRun as UserRunEntity};
use crate::models::durations::{format_duration, parse_duration};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl RunStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "Pending",
            RunStatus::Verified => "Verified",
            RunStatus::Rejected => "Rejected",
        }
    }

    /// Normalizes a stored status column. Rows predating moderation have no
    /// status at all; anything unrecognized is treated the same way.
    pub fn from_stored(raw: Option<&str>) -> RunStatus {
        match raw {
            Some("Verified") => RunStatus::Verified,
            Some("Rejected") => RunStatus::Rejected,
            _ => RunStatus::Pending,
        }
    }
}

impl FromStr for RunStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RunStatus::Pending),
            "Verified" => Ok(RunStatus::Verified),
            "Rejected" => Ok(RunStatus::Rejected),
            _ => Err(AppError::RunsInvalidStatus),
        }
    }
}

/// One submitted speedrun, normalized for the leaderboard engine.
///
/// `rank` is derived, never authoritative: the leaderboard builder assigns
/// it on every recomputation and it is not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunRecord {
    #[serde(rename = "SpeedrunID")]
    pub speedrun_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "GameID")]
    pub game_id: i64,
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    #[serde(rename = "PlatformID")]
    pub platform_id: i64,
    pub username: String,
    pub avatar: Option<String>,
    #[serde(rename = "FormattedTime")]
    pub time: String,
    pub category_name: String,
    pub platform_name: String,
    #[serde(rename = "VideoURL")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: RunStatus,
    pub rank: u32,
}

impl RunRecord {
    pub fn time_ms(&self) -> i64 {
        parse_duration(&self.time)
    }
}

impl From<RankedRun> for RunRecord {
    fn from(value: RankedRun) -> Self {
        Self {
            speedrun_id: value.speedrun_id,
            user_id: value.user_id,
            game_id: value.game_id,
            category_id: value.category_id,
            platform_id: value.platform_id,
            username: value.username,
            avatar: value.avatar,
            time: value.time,
            category_name: value.category_name,
            platform_name: value.platform_name,
            video_url: value.video_url,
            created_at: value.created_at,
            status: RunStatus::from_stored(value.status.as_deref()),
            rank: 0,
        }
    }
}

/// A run on its submitter's profile page.
#[derive(Debug, Clone, Serialize)]
pub struct UserRun {
    #[serde(rename = "SpeedrunID")]
    pub speedrun_id: i64,
    #[serde(rename = "game")]
    pub game_title: String,
    #[serde(rename = "category")]
    pub category_name: String,
    pub time: String,
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
    #[serde(rename = "date")]
    pub date: String,
    #[serde(rename = "Status")]
    pub status: RunStatus,
}

impl From<UserRunEntity> for UserRun {
    fn from(value: UserRunEntity) -> Self {
        Self {
            speedrun_id: value.speedrun_id,
            game_title: value.game_title,
            category_name: value.category_name,
            time: value.time,
            video_url: value.video_url,
            date: value.created_at.format("%d/%m/%Y").to_string(),
            status: RunStatus::from_stored(value.status.as_deref()),
        }
    }
}

/// A profile's runs with rejections split out; rejected runs drive the
/// notification badge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRuns {
    pub speedruns: Vec<UserRun>,
    pub rejected: Vec<UserRun>,
    pub notifications: usize,
}

/// An incoming submission. The time arrives split into its display parts and
/// is recombined through the duration codec before storage.
#[derive(Debug, Deserialize)]
pub struct RunSubmission {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "gameID")]
    pub game_id: i64,
    #[serde(rename = "categoryID")]
    pub category_id: i64,
    #[serde(rename = "platformID")]
    pub platform_id: i64,
    #[serde(rename = "timeHours")]
    pub time_hours: i64,
    #[serde(rename = "timeMinutes")]
    pub time_minutes: i64,
    #[serde(rename = "timeSeconds")]
    pub time_seconds: i64,
    #[serde(rename = "timeMilliseconds")]
    pub time_milliseconds: i64,
    #[serde(rename = "videoURL")]
    pub video_url: String,
}

impl RunSubmission {
    pub fn time_ms(&self) -> i64 {
        self.time_hours
            .saturating_mul(3_600_000)
            .saturating_add(self.time_minutes.saturating_mul(60_000))
            .saturating_add(self.time_seconds.saturating_mul(1000))
            .saturating_add(self.time_milliseconds)
    }

    /// Canonical stored representation of the submitted time.
    pub fn formatted_time(&self) -> String {
        format_duration(self.time_ms().max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_statuses_normalize_to_pending_when_unrecognized() {
        assert_eq!(RunStatus::from_stored(None), RunStatus::Pending);
        assert_eq!(RunStatus::from_stored(Some("")), RunStatus::Pending);
        assert_eq!(RunStatus::from_stored(Some("verified")), RunStatus::Pending);
        assert_eq!(
            RunStatus::from_stored(Some("Verified")),
            RunStatus::Verified
        );
        assert_eq!(
            RunStatus::from_stored(Some("Rejected")),
            RunStatus::Rejected
        );
    }

    #[test]
    fn client_supplied_statuses_parse_strictly() {
        assert_eq!(
            "Verified".parse::<RunStatus>().unwrap(),
            RunStatus::Verified
        );
        assert!("verified".parse::<RunStatus>().is_err());
    }

    #[test]
    fn submissions_recombine_their_split_time_parts() {
        let submission = RunSubmission {
            user_id: 1,
            game_id: 1,
            category_id: 1,
            platform_id: 1,
            time_hours: 1,
            time_minutes: 2,
            time_seconds: 3,
            time_milliseconds: 4,
            video_url: String::new(),
        };
        assert_eq!(submission.time_ms(), 3_723_004);
        assert_eq!(submission.formatted_time(), "1:02:03.004");
    }
}
