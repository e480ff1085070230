use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;

use crate::{
    db::entities::form_submission,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub form_type: String,
    pub payload: serde_json::Value,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submissions", post(create_submission))
        .with_state(state)
}

async fn create_submission(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmissionRequest>,
) -> ApiResult<form_submission::Model> {
    let submission = ServiceContext::from_state(state.as_ref())
        .form_submission()
        .submit(&body.form_type, body.payload)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", submission)
}
