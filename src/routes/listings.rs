use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    db::entities::{job_opening, press_article},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/jobs", get(open_jobs))
        .route("/press", get(press_articles))
        .with_state(state)
}

async fn open_jobs(State(state): State<Arc<AppState>>) -> ApiResult<Vec<job_opening::Model>> {
    let jobs = ServiceContext::from_state(state.as_ref())
        .job_opening()
        .list_open()
        .await?;
    JsonApiResponse::ok(jobs)
}

async fn press_articles(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<press_article::Model>> {
    let articles = ServiceContext::from_state(state.as_ref())
        .press_article()
        .list_newest_first()
        .await?;
    JsonApiResponse::ok(articles)
}
