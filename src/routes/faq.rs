use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, faq_service::FaqCategoryWithQuestions},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/faq", get(faq_tree)).with_state(state)
}

async fn faq_tree(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<FaqCategoryWithQuestions>> {
    let tree = ServiceContext::from_state(state.as_ref())
        .faq_category()
        .list_with_questions()
        .await?;
    JsonApiResponse::ok(tree)
}
