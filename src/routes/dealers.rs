use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::entities::dealer,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, dealer_service::DealerFilterOptions},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct DealerQuery {
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dealers", get(list_dealers))
        .route("/dealers/filters", get(dealer_filters))
        .with_state(state)
}

async fn list_dealers(
    State(app): State<Arc<AppState>>,
    Query(query): Query<DealerQuery>,
) -> ApiResult<Vec<dealer::Model>> {
    let dealers = ServiceContext::from_state(app.as_ref())
        .dealer()
        .list_active(
            query.state.as_deref(),
            query.district.as_deref(),
            query.city.as_deref(),
        )
        .await?;
    JsonApiResponse::ok(dealers)
}

async fn dealer_filters(
    State(app): State<Arc<AppState>>,
    Query(query): Query<DealerQuery>,
) -> ApiResult<DealerFilterOptions> {
    let options = ServiceContext::from_state(app.as_ref())
        .dealer()
        .filter_options(query.state.as_deref(), query.district.as_deref())
        .await?;
    JsonApiResponse::ok(options)
}
