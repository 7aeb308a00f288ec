use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::games::Game;
use crate::usecases::games;
use axum::Json;

pub async fn list(ctx: RequestContext) -> ServiceResponse<Vec<Game>> {
    let games = games::fetch_all(&ctx).await?;
    Ok(Json(games))
}
