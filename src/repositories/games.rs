use crate::common::context::Context;
use crate::entities::games::Game;

const TABLE_NAME: &str = "games";
const READ_FIELDS: &str =
    "game_id, title, image_url, year, total_speedruns, platforms, description";

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Game>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY total_speedruns DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

/// Bumps the per-game run counter; pass a negative delta on deletion.
pub async fn adjust_total_speedruns<C: Context>(
    ctx: &C,
    game_id: i64,
    delta: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET total_speedruns = total_speedruns + ? WHERE game_id = ?"
    );
    sqlx::query(QUERY)
        .bind(delta)
        .bind(game_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
