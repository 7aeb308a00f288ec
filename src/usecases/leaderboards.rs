use crate::models::leaderboards::LeaderboardFilter;
use crate::models::runs::{RunRecord, RunStatus};
use crate::models::users::Role;
use hashbrown::HashSet;

/// Builds the ordered, ranked, visible leaderboard for one game out of a
/// snapshot of its runs.
///
/// Standard viewers only see verified runs; admins see every run, with the
/// unverified ones interleaved at their sorted position. Ranks are assigned
/// densely over the verified entries alone (1..N ascending by time), so an
/// interleaved pending or rejected run carries rank 0 and does not consume
/// a rank slot. Ties keep their original relative order.
pub fn build_leaderboard(
    records: &[RunRecord],
    viewer: Role,
    filter: &LeaderboardFilter,
) -> Vec<RunRecord> {
    let mut board: Vec<RunRecord> = records
        .iter()
        .filter(|record| viewer.is_admin() || record.status == RunStatus::Verified)
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    // sort_by_key is stable; the snapshot's order is the tiebreak.
    board.sort_by_key(RunRecord::time_ms);

    let mut next_rank = 0u32;
    for entry in &mut board {
        entry.rank = if entry.status == RunStatus::Verified {
            next_rank += 1;
            next_rank
        } else {
            0
        };
    }
    board
}

/// The distinct platform names present in a record set, sorted; feeds the
/// platform filter dropdown.
pub fn distinct_platforms(records: &[RunRecord]) -> Vec<String> {
    let mut platforms: Vec<String> = records
        .iter()
        .map(|record| record.platform_name.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    platforms.sort();
    platforms
}
