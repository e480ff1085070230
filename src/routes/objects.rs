//! Public side of the object store: the signed upload PUT and file serving.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    routing::put,
};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::{
    response::{ApiResult, JsonApiResponse},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct StoredObjectResponse {
    pub path: String,
}

pub fn serve_router(state: Arc<AppState>) -> Router {
    let serve_dir = ServeDir::new(state.objects.root().to_path_buf());
    // Body limit sits above the store's own cap so oversized uploads get the
    // store's 400 instead of a bare 413.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + 1024);

    // Nesting strips the `/objects` prefix, so `ServeDir` sees the same
    // relative paths `ObjectStore::store` writes.
    Router::new()
        .route(
            "/objects/upload/{token}",
            put(store_object).layer(body_limit),
        )
        .nest_service("/objects", serve_dir)
        .with_state(state)
}

async fn store_object(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    body: Bytes,
) -> ApiResult<StoredObjectResponse> {
    let path = state.objects.store(&token, &body).await?;
    JsonApiResponse::ok(StoredObjectResponse { path })
}
