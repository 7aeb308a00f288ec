use crate::common::context::Context;
use crate::entities::platforms::Platform;

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Platform>> {
    const QUERY: &str = "SELECT platform_id, platform_name FROM platforms";
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
