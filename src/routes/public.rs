//! Flat homepage content: hero slides, testimonials, stats.

use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    db::entities::{hero_slide, stat, testimonial},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hero-slides", get(hero_slides))
        .route("/testimonials", get(testimonials))
        .route("/stats", get(stats))
        .with_state(state)
}

async fn hero_slides(State(state): State<Arc<AppState>>) -> ApiResult<Vec<hero_slide::Model>> {
    let slides = ServiceContext::from_state(state.as_ref())
        .hero_slide()
        .list_active()
        .await?;
    JsonApiResponse::ok(slides)
}

async fn testimonials(State(state): State<Arc<AppState>>) -> ApiResult<Vec<testimonial::Model>> {
    let testimonials = ServiceContext::from_state(state.as_ref())
        .testimonial()
        .list_active()
        .await?;
    JsonApiResponse::ok(testimonials)
}

async fn stats(State(state): State<Arc<AppState>>) -> ApiResult<Vec<stat::Model>> {
    let stats = ServiceContext::from_state(state.as_ref())
        .stat()
        .list_ordered()
        .await?;
    JsonApiResponse::ok(stats)
}
