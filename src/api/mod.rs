use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::models::runs::{RunRecord, RunStatus};
use crate::repositories;
use crate::settings::AppSettings;
use crate::usecases;
use crate::usecases::moderation::RunStore;
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{delete, get, post, put};
use serde::Serialize;
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use tracing::info;

pub mod games;
pub mod rankings;
pub mod speedruns;
pub mod static_refs;
pub mod users;

pub struct RequestContext {
    pub db: Pool<MySql>,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }
}

#[async_trait]
impl RunStore for RequestContext {
    async fn fetch_game_runs(&self, game_id: i64) -> anyhow::Result<Vec<RunRecord>> {
        let runs = repositories::speedruns::fetch_game_runs(self, game_id).await?;
        Ok(runs.into_iter().map(RunRecord::from).collect())
    }

    async fn persist_status(&self, run_id: i64, status: RunStatus) -> anyhow::Result<()> {
        let affected = repositories::speedruns::update_status(self, run_id, status).await?;
        anyhow::ensure!(affected > 0, "speedrun {run_id} does not exist");
        Ok(())
    }

    async fn delete_run(&self, run_id: i64) -> anyhow::Result<()> {
        let deleted = usecases::speedruns::delete_with_counters(self, run_id).await?;
        anyhow::ensure!(deleted, "speedrun {run_id} was already gone");
        Ok(())
    }
}

/// Transport-level acknowledgement envelope.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route("/games", get(games::list))
        .route("/games/{game_id}/stats", get(rankings::game_stats))
        .route("/rankings/{game_id}", get(rankings::game_ranking))
        .route("/speedruns", post(speedruns::submit))
        .route("/speedruns/user/{user_id}", get(speedruns::user_runs))
        .route("/speedruns/{run_id}/status", put(speedruns::update_status))
        .route("/speedruns/{run_id}", delete(speedruns::remove))
        .route("/users/upsert", post(users::upsert))
        .route("/categories", get(static_refs::categories))
        .route("/platforms", get(static_refs::platforms));
    Router::new().nest("/api", api)
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::from((settings.app_host, settings.app_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
