use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        calculator::{CalculatorVehicle, CostEstimate},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub vehicle_id: Uuid,
    pub daily_km: f64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calculator/vehicles", get(calculator_vehicles))
        .route("/calculator", post(estimate))
        .with_state(state)
}

async fn calculator_vehicles(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<CalculatorVehicle>> {
    let vehicles = ServiceContext::from_state(state.as_ref())
        .calculator()
        .list_vehicles()
        .await?;
    JsonApiResponse::ok(vehicles)
}

async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EstimateRequest>,
) -> ApiResult<CostEstimate> {
    let estimate = ServiceContext::from_state(state.as_ref())
        .calculator()
        .estimate(&body.vehicle_id, body.daily_km)
        .await?;
    JsonApiResponse::ok(estimate)
}
