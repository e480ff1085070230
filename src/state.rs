use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::jwt::JwtKeys, config::AppConfig, storage::ObjectStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
    pub objects: ObjectStore,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let jwt = JwtKeys::from_secret(config.jwt_secret.as_bytes());
        let objects = ObjectStore::new(
            config.object_root.clone(),
            config.max_upload_bytes,
            jwt.clone(),
        );
        Arc::new(Self {
            config,
            db,
            jwt,
            objects,
        })
    }
}
