//! Shared helpers for unit and integration tests.

use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, routes::router, state::AppState};

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 5,
        db_min_idle: 1,
        jwt_secret: "test-secret".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "adminpassword".to_string(),
        object_root: std::env::temp_dir().join("showroom-test-objects"),
        max_upload_bytes: 10 * 1024 * 1024,
        demo_seed: false,
        log_level: "info".to_string(),
    }
}

pub fn test_state(secret: &[u8], db: DatabaseConnection) -> Arc<AppState> {
    let mut cfg = test_config();
    cfg.jwt_secret = String::from_utf8_lossy(secret).into_owned();
    AppState::new(cfg, db)
}

/// Full application router over a `MockDatabase` with no prepared results.
/// Good for routing, guard and error-shape tests that never hit the DB.
pub fn test_router(secret: &[u8]) -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    router(test_state(secret, db))
}
