use crate::common::error::{AppError, ServiceResult};
use crate::models::leaderboards::LeaderboardFilter;
use crate::models::runs::{RunRecord, RunStatus};
use crate::models::stats::GameStats;
use crate::models::users::Role;
use crate::usecases::{leaderboards, stats};
use async_trait::async_trait;
use tracing::{info, warn};

/// The storage collaborator the moderation engine reconciles against. The
/// live service binds it to the repositories through its request context;
/// tests inject stubs with canned outcomes.
#[async_trait]
pub trait RunStore: Sync + Send {
    async fn fetch_game_runs(&self, game_id: i64) -> anyhow::Result<Vec<RunRecord>>;
    async fn persist_status(&self, run_id: i64, status: RunStatus) -> anyhow::Result<()>;
    async fn delete_run(&self, run_id: i64) -> anyhow::Result<()>;
}

/// Where one moderation action stands. An action is born pending; resolving
/// the storage outcome moves it to exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationState {
    PendingConfirmation,
    Confirmed,
    RolledBack,
}

/// One in-flight status change. Holds its own snapshot of the previous
/// status, so changes on different records never interfere.
#[derive(Debug)]
pub struct StatusChange {
    pub run_id: i64,
    pub target: RunStatus,
    pub state: ModerationState,
    previous: RunStatus,
}

/// The moderation session for one game: the owned run collection plus the
/// leaderboard and stats derived from it. Sole mutator of the collection;
/// the builder and aggregator stay pure functions over its snapshot.
#[derive(Debug)]
pub struct RunBoard {
    game_id: i64,
    viewer: Role,
    filter: LeaderboardFilter,
    runs: Vec<RunRecord>,
    leaderboard: Vec<RunRecord>,
    stats: GameStats,
}

impl RunBoard {
    pub fn new(game_id: i64, viewer: Role, runs: Vec<RunRecord>) -> Self {
        let mut board = Self {
            game_id,
            viewer,
            filter: LeaderboardFilter::default(),
            runs,
            leaderboard: Vec::new(),
            stats: GameStats::default(),
        };
        board.recompute();
        board
    }

    pub fn game_id(&self) -> i64 {
        self.game_id
    }

    pub fn leaderboard(&self) -> &[RunRecord] {
        &self.leaderboard
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn set_filter(&mut self, filter: LeaderboardFilter) {
        self.filter = filter;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(LeaderboardFilter::default());
    }

    fn recompute(&mut self) {
        self.leaderboard = leaderboards::build_leaderboard(&self.runs, self.viewer, &self.filter);
        self.stats = stats::compute_stats(&self.runs);
    }

    fn run_mut(&mut self, run_id: i64) -> Option<&mut RunRecord> {
        self.runs.iter_mut().find(|run| run.speedrun_id == run_id)
    }

    /// Optimistic half of a verify/reject: flips the status locally and
    /// recomputes, so the speculative state is visible before any storage
    /// round-trip. Refuses unknown ids and runs that already left `Pending`
    /// without touching anything.
    pub fn begin_status_change(
        &mut self,
        run_id: i64,
        target: RunStatus,
    ) -> ServiceResult<StatusChange> {
        let run = self.run_mut(run_id).ok_or(AppError::RunsNotFound)?;
        if run.status != RunStatus::Pending {
            return Err(AppError::RunsAlreadyModerated);
        }
        let previous = run.status;
        run.status = target;
        self.recompute();
        Ok(StatusChange {
            run_id,
            target,
            state: ModerationState::PendingConfirmation,
            previous,
        })
    }

    /// Reconciling half: confirms the change, or restores the captured
    /// previous status, recomputes and surfaces the storage failure.
    pub fn resolve_status_change(
        &mut self,
        change: &mut StatusChange,
        outcome: anyhow::Result<()>,
    ) -> ServiceResult<()> {
        match outcome {
            Ok(()) => {
                change.state = ModerationState::Confirmed;
                Ok(())
            }
            Err(e) => {
                if let Some(run) = self.run_mut(change.run_id) {
                    run.status = change.previous;
                }
                self.recompute();
                change.state = ModerationState::RolledBack;
                Err(AppError::ModerationPersistFailed(e.to_string()))
            }
        }
    }

    /// Optimistic removal; returns the captured record so the caller can
    /// still display it while the delete is in flight.
    pub fn begin_remove(&mut self, run_id: i64) -> ServiceResult<RunRecord> {
        let position = self
            .runs
            .iter()
            .position(|run| run.speedrun_id == run_id)
            .ok_or(AppError::RunsNotFound)?;
        let record = self.runs.remove(position);
        self.recompute();
        Ok(record)
    }

    /// Replaces the collection with the store's truth. Used after a failed
    /// delete: re-inserting the captured record locally could drift from the
    /// aggregate counters the store maintains alongside runs.
    pub fn reload(&mut self, runs: Vec<RunRecord>) {
        self.runs = runs;
        self.recompute();
    }
}

pub async fn verify<S: RunStore>(
    board: &mut RunBoard,
    store: &S,
    run_id: i64,
) -> ServiceResult<ModerationState> {
    moderate(board, store, run_id, RunStatus::Verified).await
}

pub async fn reject<S: RunStore>(
    board: &mut RunBoard,
    store: &S,
    run_id: i64,
) -> ServiceResult<ModerationState> {
    moderate(board, store, run_id, RunStatus::Rejected).await
}

async fn moderate<S: RunStore>(
    board: &mut RunBoard,
    store: &S,
    run_id: i64,
    target: RunStatus,
) -> ServiceResult<ModerationState> {
    let mut change = board.begin_status_change(run_id, target)?;
    let outcome = store.persist_status(run_id, target).await;
    if let Err(ref e) = outcome {
        warn!("Rolling back {target:?} for run {run_id}: {e}");
    }
    board.resolve_status_change(&mut change, outcome)?;
    info!("Run {run_id} is now {target:?}");
    Ok(change.state)
}

/// Removes a run optimistically. A failed delete does not restore the record
/// locally; the board is resynchronized from the store instead and the
/// reload is surfaced to the caller.
pub async fn remove<S: RunStore>(
    board: &mut RunBoard,
    store: &S,
    run_id: i64,
) -> ServiceResult<RunRecord> {
    let record = board.begin_remove(run_id)?;
    match store.delete_run(run_id).await {
        Ok(()) => {
            info!("Run {run_id} deleted");
            Ok(record)
        }
        Err(e) => {
            warn!("Delete of run {run_id} failed, reloading game {}: {e}", board.game_id());
            let runs = store.fetch_game_runs(board.game_id()).await?;
            board.reload(runs);
            Err(AppError::ModerationReloadRequired(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::leaderboards::tests::run;
    use anyhow::anyhow;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubStore {
        fail_persist: bool,
        fail_delete: bool,
        server_runs: Vec<RunRecord>,
        persisted: Mutex<Vec<(i64, RunStatus)>>,
        deleted: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl RunStore for StubStore {
        async fn fetch_game_runs(&self, _game_id: i64) -> anyhow::Result<Vec<RunRecord>> {
            Ok(self.server_runs.clone())
        }

        async fn persist_status(&self, run_id: i64, status: RunStatus) -> anyhow::Result<()> {
            if self.fail_persist {
                return Err(anyhow!("persist rejected by storage"));
            }
            self.persisted.lock().unwrap().push((run_id, status));
            Ok(())
        }

        async fn delete_run(&self, run_id: i64) -> anyhow::Result<()> {
            if self.fail_delete {
                return Err(anyhow!("delete rejected by storage"));
            }
            self.deleted.lock().unwrap().push(run_id);
            Ok(())
        }
    }

    fn board() -> RunBoard {
        RunBoard::new(
            1,
            Role::Admin,
            vec![
                run(1, 2000, RunStatus::Verified),
                run(2, 1000, RunStatus::Pending),
                run(3, 500, RunStatus::Verified),
            ],
        )
    }

    fn statuses(board: &RunBoard) -> Vec<(i64, RunStatus)> {
        board
            .leaderboard()
            .iter()
            .map(|entry| (entry.speedrun_id, entry.status))
            .collect()
    }

    #[tokio::test]
    async fn verify_confirms_and_persists() {
        let mut board = board();
        let store = StubStore::default();

        let state = verify(&mut board, &store, 2).await.unwrap();
        assert_eq!(state, ModerationState::Confirmed);
        assert_eq!(
            statuses(&board),
            [
                (3, RunStatus::Verified),
                (2, RunStatus::Verified),
                (1, RunStatus::Verified)
            ]
        );
        // The freshly verified run now consumes a rank slot.
        let ranks: Vec<u32> = board.leaderboard().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
        assert_eq!(board.stats().total_speedruns, 3);
        assert_eq!(
            *store.persisted.lock().unwrap(),
            [(2, RunStatus::Verified)]
        );
    }

    #[tokio::test]
    async fn reject_hides_the_run_from_ranking() {
        let mut board = board();
        let store = StubStore::default();

        reject(&mut board, &store, 2).await.unwrap();
        let rejected = board
            .leaderboard()
            .iter()
            .find(|e| e.speedrun_id == 2)
            .unwrap();
        assert_eq!(rejected.status, RunStatus::Rejected);
        assert_eq!(rejected.rank, 0);
        assert_eq!(board.stats().total_speedruns, 2);
    }

    #[tokio::test]
    async fn failed_persist_rolls_the_board_back_exactly() {
        let mut board = board();
        let before_leaderboard = board.leaderboard().to_vec();
        let before_stats = board.stats().clone();
        let store = StubStore {
            fail_persist: true,
            ..StubStore::default()
        };

        let err = verify(&mut board, &store, 2).await.unwrap_err();
        match err {
            AppError::ModerationPersistFailed(reason) => {
                assert!(reason.contains("persist rejected"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(board.leaderboard(), before_leaderboard);
        assert_eq!(board.stats(), &before_stats);
    }

    #[tokio::test]
    async fn unknown_ids_do_not_dispatch_or_mutate() {
        let mut board = board();
        let before = board.leaderboard().to_vec();
        let store = StubStore::default();

        let err = verify(&mut board, &store, 999).await.unwrap_err();
        assert!(matches!(err, AppError::RunsNotFound));
        assert_eq!(board.leaderboard(), before);
        assert!(store.persisted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn moderated_runs_cannot_change_status_again() {
        let mut board = board();
        let store = StubStore::default();

        let err = verify(&mut board, &store, 1).await.unwrap_err();
        assert!(matches!(err, AppError::RunsAlreadyModerated));
        assert!(store.persisted.lock().unwrap().is_empty());
    }

    #[test]
    fn speculative_state_is_visible_before_resolution() {
        let mut board = board();

        let mut change = board.begin_status_change(2, RunStatus::Verified).unwrap();
        assert_eq!(change.state, ModerationState::PendingConfirmation);
        assert_eq!(board.stats().total_speedruns, 3);

        let err = board
            .resolve_status_change(&mut change, Err(anyhow!("wire dropped")))
            .unwrap_err();
        assert!(matches!(err, AppError::ModerationPersistFailed(_)));
        assert_eq!(change.state, ModerationState::RolledBack);
        assert_eq!(board.stats().total_speedruns, 2);
    }

    #[test]
    fn concurrent_changes_keep_their_own_snapshots() {
        let mut board = RunBoard::new(
            1,
            Role::Admin,
            vec![
                run(1, 1000, RunStatus::Pending),
                run(2, 2000, RunStatus::Pending),
            ],
        );

        let mut first = board.begin_status_change(1, RunStatus::Verified).unwrap();
        let mut second = board.begin_status_change(2, RunStatus::Rejected).unwrap();
        assert_eq!(board.stats().total_speedruns, 1);

        // The first rolls back on its own; the second still confirms.
        board
            .resolve_status_change(&mut first, Err(anyhow!("boom")))
            .unwrap_err();
        board.resolve_status_change(&mut second, Ok(())).unwrap();

        assert_eq!(
            statuses(&board),
            [(1, RunStatus::Pending), (2, RunStatus::Rejected)]
        );
        assert_eq!(board.stats().total_speedruns, 0);
    }

    #[tokio::test]
    async fn remove_deletes_locally_first() {
        let mut board = board();
        let store = StubStore::default();

        let record = remove(&mut board, &store, 3).await.unwrap();
        assert_eq!(record.speedrun_id, 3);
        assert_eq!(statuses(&board), [(2, RunStatus::Pending), (1, RunStatus::Verified)]);
        assert_eq!(board.stats().total_speedruns, 1);
        assert_eq!(*store.deleted.lock().unwrap(), [3]);
    }

    #[tokio::test]
    async fn failed_delete_resynchronizes_from_the_store() {
        let mut board = board();
        let store = StubStore {
            fail_delete: true,
            // Server truth differs from what a local undo would reconstruct.
            server_runs: vec![
                run(1, 2000, RunStatus::Verified),
                run(3, 500, RunStatus::Verified),
            ],
            ..StubStore::default()
        };

        let err = remove(&mut board, &store, 3).await.unwrap_err();
        assert!(matches!(err, AppError::ModerationReloadRequired(_)));
        assert_eq!(
            statuses(&board),
            [(3, RunStatus::Verified), (1, RunStatus::Verified)]
        );
        assert_eq!(board.stats().total_speedruns, 2);
    }

    #[tokio::test]
    async fn remove_of_an_unknown_id_is_rejected_up_front() {
        let mut board = board();
        let store = StubStore::default();

        let err = remove(&mut board, &store, 999).await.unwrap_err();
        assert!(matches!(err, AppError::RunsNotFound));
        assert!(store.deleted.lock().unwrap().is_empty());
        assert_eq!(board.stats().total_speedruns, 2);
    }

    #[test]
    fn filters_recompute_the_visible_board() {
        let mut board = board();
        board.set_filter(LeaderboardFilter::by_category("No Such Category"));
        assert!(board.leaderboard().is_empty());
        // Stats still describe the whole game.
        assert_eq!(board.stats().total_speedruns, 2);

        board.clear_filters();
        assert_eq!(board.leaderboard().len(), 3);
    }
}
