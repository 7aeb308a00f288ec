use crate::models::durations::format_duration;
use crate::models::runs::{RunRecord, RunStatus};
use crate::models::stats::GameStats;

/// Aggregates world record, verified run count and mean time for one game.
///
/// Only verified runs count, and the whole snapshot counts: stats describe
/// the game, not the currently filtered leaderboard view, so this always
/// takes the unfiltered record set. Must be re-run whenever the snapshot's
/// status composition changes.
pub fn compute_stats(records: &[RunRecord]) -> GameStats {
    let verified: Vec<i64> = records
        .iter()
        .filter(|record| record.status == RunStatus::Verified)
        .map(RunRecord::time_ms)
        .collect();
    let Some(&world_record) = verified.iter().min() else {
        return GameStats::default();
    };

    let total: i128 = verified.iter().map(|&ms| i128::from(ms)).sum();
    let average = (total / verified.len() as i128) as i64;

    GameStats {
        world_record: format_duration(world_record),
        total_speedruns: verified.len(),
        average_time: format_duration(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::durations::ZERO_DURATION;
    use crate::models::leaderboards::LeaderboardFilter;
    use crate::models::users::Role;
    use crate::usecases::leaderboards::build_leaderboard;
    use crate::usecases::leaderboards::tests::run;

    #[test]
    fn no_verified_runs_means_zero_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, GameStats::default());
        assert_eq!(stats.world_record, ZERO_DURATION);
        assert_eq!(stats.average_time, ZERO_DURATION);
        assert_eq!(stats.total_speedruns, 0);

        let pending_only = vec![run(1, 1000, RunStatus::Pending)];
        assert_eq!(compute_stats(&pending_only), GameStats::default());
    }

    #[test]
    fn aggregates_the_verified_subset() {
        let records = vec![
            run(1, 1000, RunStatus::Verified),
            run(2, 3000, RunStatus::Verified),
            run(3, 100, RunStatus::Pending),
            run(4, 200, RunStatus::Rejected),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.total_speedruns, 2);
        assert_eq!(stats.world_record, format_duration(1000));
        assert_eq!(stats.average_time, format_duration(2000));
    }

    #[test]
    fn average_floors_to_whole_milliseconds() {
        let records = vec![
            run(1, 1000, RunStatus::Verified),
            run(2, 1001, RunStatus::Verified),
        ];
        assert_eq!(compute_stats(&records).average_time, format_duration(1000));
    }

    #[test]
    fn world_record_renders_canonically_even_for_legacy_rows() {
        let mut legacy = run(1, 0, RunStatus::Verified);
        legacy.time = "02:03.004".to_owned();
        let stats = compute_stats(&[legacy]);
        assert_eq!(stats.world_record, "0:02:03.004");
    }

    #[test]
    fn stats_ignore_facet_filters() {
        let mut glitchless = run(2, 500, RunStatus::Verified);
        glitchless.category_name = "Glitchless".to_owned();
        let records = vec![run(1, 1000, RunStatus::Verified), glitchless];

        let filter = LeaderboardFilter::by_category("Glitchless");
        let board = build_leaderboard(&records, Role::Standard, &filter);
        assert_eq!(board.len(), 1);

        // The leaderboard narrowed; the stats must not.
        let stats = compute_stats(&records);
        assert_eq!(stats.total_speedruns, 2);
        assert_eq!(stats.world_record, format_duration(500));
        assert_eq!(stats.average_time, format_duration(750));
    }

    #[test]
    fn serializes_with_the_wire_field_names() {
        let value = serde_json::to_value(GameStats::default()).unwrap();
        assert_eq!(value["worldRecord"], ZERO_DURATION);
        assert_eq!(value["totalSpeedruns"], 0);
        assert_eq!(value["averageTime"], ZERO_DURATION);
    }
}
