use crate::models::durations::ZERO_DURATION;
use serde::Serialize;

/// Aggregate statistics for one game, always computed over the full verified
/// set regardless of any leaderboard facet filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub world_record: String,
    pub total_speedruns: usize,
    pub average_time: String,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            world_record: ZERO_DURATION.to_owned(),
            total_speedruns: 0,
            average_time: ZERO_DURATION.to_owned(),
        }
    }
}
