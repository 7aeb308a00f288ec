use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::users::{UpsertUser, UserProfile};
use crate::usecases::users;
use axum::Json;

pub async fn upsert(
    ctx: RequestContext,
    Json(profile): Json<UpsertUser>,
) -> ServiceResponse<UserProfile> {
    let profile = users::upsert(&ctx, profile).await?;
    Ok(Json(profile))
}
