use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::entities::dynamic_page,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, page_service::PageNavEntry},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pages", get(list_pages))
        .route("/pages/{slug}", get(get_page))
        .with_state(state)
}

async fn list_pages(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PageNavEntry>> {
    let nav = ServiceContext::from_state(state.as_ref())
        .dynamic_page()
        .list_navigation()
        .await?;
    JsonApiResponse::ok(nav)
}

async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<dynamic_page::Model> {
    let page = ServiceContext::from_state(state.as_ref())
        .dynamic_page()
        .get_published(&slug)
        .await?;
    JsonApiResponse::ok(page)
}
