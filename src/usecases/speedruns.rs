use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::runs::{ProfileRuns, RunRecord, RunStatus, RunSubmission, UserRun};
use crate::repositories::{games, speedruns, users};
use tracing::info;

/// The full run set for one game, normalized into leaderboard records.
pub async fn fetch_game_runs<C: Context>(ctx: &C, game_id: i64) -> ServiceResult<Vec<RunRecord>> {
    match speedruns::fetch_game_runs(ctx, game_id).await {
        Ok(runs) => Ok(runs.into_iter().map(RunRecord::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// A user's runs for their profile, with rejected ones split out to drive
/// the notification badge.
pub async fn fetch_profile_runs<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<ProfileRuns> {
    let runs = speedruns::fetch_user_runs(ctx, user_id).await?;
    let (rejected, speedruns): (Vec<UserRun>, Vec<UserRun>) = runs
        .into_iter()
        .map(UserRun::from)
        .partition(|run| run.status == RunStatus::Rejected);
    Ok(ProfileRuns {
        notifications: rejected.len(),
        speedruns,
        rejected,
    })
}

/// Stores a new submission as `Pending` and bumps the aggregate counters.
/// The split time fields are recombined through the duration codec so only
/// the canonical shape is ever written.
pub async fn submit<C: Context>(ctx: &C, submission: RunSubmission) -> ServiceResult<()> {
    let time = submission.formatted_time();
    speedruns::create(ctx, &submission, &time).await?;
    games::adjust_total_speedruns(ctx, submission.game_id, 1).await?;
    users::adjust_total_runs(ctx, submission.user_id, 1).await?;
    info!(
        "New {time} run for game {} by user {}",
        submission.game_id, submission.user_id
    );
    Ok(())
}

/// Persists a status for the optimistic moderation protocol; the storage
/// side of a verify/reject.
pub async fn update_status<C: Context>(
    ctx: &C,
    run_id: i64,
    status: RunStatus,
) -> ServiceResult<()> {
    let affected = speedruns::update_status(ctx, run_id, status).await?;
    if affected == 0 {
        return Err(AppError::RunsNotFound);
    }
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, run_id: i64) -> ServiceResult<()> {
    match delete_with_counters(ctx, run_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::RunsNotFound),
        Err(e) => unexpected(e),
    }
}

/// Deletes a run and decrements the game/user counters it was feeding.
/// Returns false when the id matched nothing. Also the storage side of the
/// moderation engine's delete.
pub async fn delete_with_counters<C: Context>(ctx: &C, run_id: i64) -> anyhow::Result<bool> {
    let Some(doomed) = speedruns::fetch_doomed(ctx, run_id).await? else {
        return Ok(false);
    };
    speedruns::delete(ctx, run_id).await?;
    games::adjust_total_speedruns(ctx, doomed.game_id, -1).await?;
    users::adjust_total_runs(ctx, doomed.user_id, -1).await?;
    Ok(true)
}
