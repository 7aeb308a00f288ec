use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::users::{UpsertUser, UserProfile};
use crate::repositories::users;

pub async fn upsert<C: Context>(ctx: &C, profile: UpsertUser) -> ServiceResult<UserProfile> {
    match users::upsert(ctx, &profile).await {
        Ok(user) => Ok(UserProfile::from(user)),
        Err(e) => unexpected(e),
    }
}
