use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_idle: u32,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub object_root: PathBuf,
    pub max_upload_bytes: usize,
    pub demo_seed: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16")?;
        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".to_string());

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(val) => val,
            Err(_) if cfg!(debug_assertions) => "sqlite::memory:".to_string(),
            Err(err) => {
                Err(anyhow::anyhow!(err)).context("DATABASE_URL is required in release builds")?
            }
        };
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?;
        let db_min_idle = std::env::var("DB_MIN_IDLE")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u32>()
            .context("DB_MIN_IDLE must be a valid u32")?;

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(val) => val,
            Err(_) if cfg!(debug_assertions) => "super-secret-change-me".to_string(),
            Err(err) => {
                Err(anyhow::anyhow!(err)).context("JWT_SECRET is required in release builds")?
            }
        };

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
        let admin_password = match std::env::var("ADMIN_PASSWORD") {
            Ok(val) => val,
            Err(_) if cfg!(debug_assertions) => "adminpassword".to_string(),
            Err(err) => {
                Err(anyhow::anyhow!(err)).context("ADMIN_PASSWORD is required in release builds")?
            }
        };

        let object_root = std::env::var("OBJECT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("objects"));
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_BYTES must be a valid usize")?;

        let demo_seed = std::env::var("DEMO_SEED")
            .map(|val| matches!(val.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            db_min_idle,
            jwt_secret,
            admin_email,
            admin_password,
            object_root,
            max_upload_bytes,
            demo_seed,
            log_level,
        })
    }
}
