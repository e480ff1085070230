use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::entities::vehicle,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, vehicle_service::VehicleDetail},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub category: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/{slug}", get(vehicle_detail))
        .with_state(state)
}

async fn list_vehicles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VehicleListQuery>,
) -> ApiResult<Vec<vehicle::Model>> {
    let vehicles = ServiceContext::from_state(state.as_ref())
        .vehicle()
        .list_active(query.category.as_deref())
        .await?;
    JsonApiResponse::ok(vehicles)
}

async fn vehicle_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<VehicleDetail> {
    let detail = ServiceContext::from_state(state.as_ref())
        .vehicle()
        .detail_by_slug(&slug)
        .await?;
    JsonApiResponse::ok(detail)
}
