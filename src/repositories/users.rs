use crate::common::context::Context;
use crate::entities::users::User;
use crate::models::users::UpsertUser;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = r#"
user_id, email, username, avatar, is_admin, followers, following,
total_runs, world_records"#;

pub async fn upsert<C: Context>(ctx: &C, profile: &UpsertUser) -> sqlx::Result<User> {
    const UPSERT: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        r#" (email, username, avatar, is_admin)
        VALUES (?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE username = VALUES(username),
        avatar = VALUES(avatar), is_admin = VALUES(is_admin)"#
    );
    sqlx::query(UPSERT)
        .bind(&profile.email)
        .bind(&profile.username)
        .bind(&profile.avatar)
        .bind(profile.is_admin)
        .execute(ctx.db())
        .await?;

    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE email = ?"
    );
    sqlx::query_as(QUERY)
        .bind(&profile.email)
        .fetch_one(ctx.db())
        .await
}

/// Bumps the per-user run counter; pass a negative delta on deletion.
pub async fn adjust_total_runs<C: Context>(ctx: &C, user_id: i64, delta: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET total_runs = total_runs + ? WHERE user_id = ?"
    );
    sqlx::query(QUERY)
        .bind(delta)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
