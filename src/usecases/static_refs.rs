use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::refs::{Category, Platform};
use crate::repositories::{categories, platforms};

// Pass-through reference data for the submission form and filter dropdowns.

pub async fn fetch_categories<C: Context>(ctx: &C) -> ServiceResult<Vec<Category>> {
    match categories::fetch_all(ctx).await {
        Ok(rows) => Ok(rows.into_iter().map(Category::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_platforms<C: Context>(ctx: &C) -> ServiceResult<Vec<Platform>> {
    match platforms::fetch_all(ctx).await {
        Ok(rows) => Ok(rows.into_iter().map(Platform::from).collect()),
        Err(e) => unexpected(e),
    }
}
