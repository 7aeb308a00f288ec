use crate::common::context::Context;
use crate::entities::categories::Category;

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Category>> {
    const QUERY: &str =
        "SELECT category_id, category_name, description, icon_color FROM categories";
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
