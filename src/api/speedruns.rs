use crate::api::{MessageResponse, RequestContext};
use crate::common::error::ServiceResponse;
use crate::models::runs::{ProfileRuns, RunStatus, RunSubmission};
use crate::usecases::speedruns;
use axum::Json;
use axum::extract::Path;
use serde::Deserialize;

pub async fn submit(
    ctx: RequestContext,
    Json(submission): Json<RunSubmission>,
) -> ServiceResponse<MessageResponse> {
    speedruns::submit(&ctx, submission).await?;
    Ok(Json(MessageResponse {
        message: "Speedrun submitted for review".to_owned(),
    }))
}

pub async fn user_runs(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResponse<ProfileRuns> {
    let runs = speedruns::fetch_profile_runs(&ctx, user_id).await?;
    Ok(Json(runs))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

pub async fn update_status(
    ctx: RequestContext,
    Path(run_id): Path<i64>,
    Json(body): Json<UpdateStatusBody>,
) -> ServiceResponse<MessageResponse> {
    let status: RunStatus = body.status.parse()?;
    speedruns::update_status(&ctx, run_id, status).await?;
    Ok(Json(MessageResponse {
        message: format!("Status updated to {}", status.as_str()),
    }))
}

pub async fn remove(
    ctx: RequestContext,
    Path(run_id): Path<i64>,
) -> ServiceResponse<MessageResponse> {
    speedruns::delete(&ctx, run_id).await?;
    Ok(Json(MessageResponse {
        message: "Speedrun deleted".to_owned(),
    }))
}
