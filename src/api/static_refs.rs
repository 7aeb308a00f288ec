use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::refs::{Category, Platform};
use crate::usecases::static_refs;
use axum::Json;

pub async fn categories(ctx: RequestContext) -> ServiceResponse<Vec<Category>> {
    let categories = static_refs::fetch_categories(&ctx).await?;
    Ok(Json(categories))
}

pub async fn platforms(ctx: RequestContext) -> ServiceResponse<Vec<Platform>> {
    let platforms = static_refs::fetch_platforms(&ctx).await?;
    Ok(Json(platforms))
}
