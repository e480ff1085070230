pub mod admin;
pub mod auth;
pub mod base_api_router;
pub mod calculator;
pub mod dealers;
pub mod faq;
pub mod listings;
pub mod objects;
pub mod pages;
pub mod public;
pub mod submissions;
pub mod vehicles;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub use base_api_router::{CrudApiRouter, ListQuery, Method};

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_PREFIX, api_router(state.clone()))
        .merge(objects::serve_router(state))
}

fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router(state.clone()))
        .merge(vehicles::router(state.clone()))
        .merge(dealers::router(state.clone()))
        .merge(faq::router(state.clone()))
        .merge(pages::router(state.clone()))
        .merge(listings::router(state.clone()))
        .merge(calculator::router(state.clone()))
        .merge(submissions::router(state.clone()))
        .nest("/auth", auth::router(state.clone()))
        .nest("/admin", admin::router(state))
}
