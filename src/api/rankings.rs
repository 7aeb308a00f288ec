use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::leaderboards::LeaderboardFilter;
use crate::models::runs::RunRecord;
use crate::models::stats::GameStats;
use crate::models::users::Role;
use crate::usecases::{leaderboards, speedruns, stats};
use axum::Json;
use axum::extract::{Path, Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    /// Resolved by the authentication layer in front of this service;
    /// standard visibility when absent.
    pub role: Option<Role>,
    pub category: Option<String>,
    pub platform: Option<String>,
}

pub async fn game_ranking(
    ctx: RequestContext,
    Path(game_id): Path<i64>,
    Query(params): Query<RankingParams>,
) -> ServiceResponse<Vec<RunRecord>> {
    let records = speedruns::fetch_game_runs(&ctx, game_id).await?;
    let filter = LeaderboardFilter::from_params(params.category, params.platform);
    let board = leaderboards::build_leaderboard(&records, params.role.unwrap_or_default(), &filter);
    Ok(Json(board))
}

pub async fn game_stats(
    ctx: RequestContext,
    Path(game_id): Path<i64>,
) -> ServiceResponse<GameStats> {
    let records = speedruns::fetch_game_runs(&ctx, game_id).await?;
    Ok(Json(stats::compute_stats(&records)))
}
