use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::games::Game;
use crate::repositories::games;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Game>> {
    match games::fetch_all(ctx).await {
        Ok(games) => Ok(games.into_iter().map(Game::from).collect()),
        Err(e) => unexpected(e),
    }
}
