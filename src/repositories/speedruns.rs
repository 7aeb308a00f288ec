use crate::common::context::Context;
use crate::entities::speedruns::{DoomedRun, RankedRun, UserRun};
use crate::models::runs::{RunStatus, RunSubmission};

const TABLE_NAME: &str = "speedruns";
const RANKING_FIELDS: &str = r#"
s.speedrun_id, s.user_id, s.game_id, s.category_id, s.platform_id,
u.username, u.avatar, s.time, c.category_name, p.platform_name,
s.video_url, s.created_at, s.status"#;

/// Every run for one game, joined with its display fields. Ordered by
/// submission time so downstream stable sorts have a deterministic base
/// order.
pub async fn fetch_game_runs<C: Context>(ctx: &C, game_id: i64) -> sqlx::Result<Vec<RankedRun>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        RANKING_FIELDS,
        " FROM ",
        TABLE_NAME,
        r#" s
        INNER JOIN users u ON s.user_id = u.user_id
        INNER JOIN categories c ON s.category_id = c.category_id
        INNER JOIN platforms p ON s.platform_id = p.platform_id
        WHERE s.game_id = ?
        ORDER BY s.created_at, s.speedrun_id"#
    );
    sqlx::query_as(QUERY).bind(game_id).fetch_all(ctx.db()).await
}

pub async fn fetch_user_runs<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<UserRun>> {
    const QUERY: &str = const_str::concat!(
        r#"
        SELECT s.speedrun_id, g.title AS game_title, c.category_name,
        s.time, s.video_url, s.created_at, s.status
        FROM "#,
        TABLE_NAME,
        r#" s
        INNER JOIN games g ON s.game_id = g.game_id
        INNER JOIN categories c ON s.category_id = c.category_id
        WHERE s.user_id = ?
        ORDER BY s.created_at DESC"#
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_all(ctx.db()).await
}

pub async fn create<C: Context>(
    ctx: &C,
    submission: &RunSubmission,
    time: &str,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        r#" (user_id, game_id, category_id, platform_id, time, video_url, status)
        VALUES (?, ?, ?, ?, ?, ?, 'Pending')"#
    );
    sqlx::query(QUERY)
        .bind(submission.user_id)
        .bind(submission.game_id)
        .bind(submission.category_id)
        .bind(submission.platform_id)
        .bind(time)
        .bind(&submission.video_url)
        .execute(ctx.db())
        .await?;
    Ok(())
}

/// Returns the number of rows touched; zero means the id matched nothing.
pub async fn update_status<C: Context>(
    ctx: &C,
    run_id: i64,
    status: RunStatus,
) -> sqlx::Result<u64> {
    const QUERY: &str =
        const_str::concat!("UPDATE ", TABLE_NAME, " SET status = ? WHERE speedrun_id = ?");
    let result = sqlx::query(QUERY)
        .bind(status.as_str())
        .bind(run_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn fetch_doomed<C: Context>(ctx: &C, run_id: i64) -> sqlx::Result<Option<DoomedRun>> {
    const QUERY: &str = const_str::concat!(
        "SELECT game_id, user_id FROM ",
        TABLE_NAME,
        " WHERE speedrun_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(run_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn delete<C: Context>(ctx: &C, run_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE speedrun_id = ?");
    sqlx::query(QUERY).bind(run_id).execute(ctx.db()).await?;
    Ok(())
}
