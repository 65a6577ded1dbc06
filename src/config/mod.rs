use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration, built once at process start and passed
/// by reference from there on.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// CORS settings for the browser POS client.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub frontend_origin: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig {
                frontend_origin: env::var("FRONTEND_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            return Err(AppError::Configuration(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }

        if self.cors.frontend_origin.is_empty() {
            return Err(AppError::Configuration(
                "FRONTEND_ORIGIN must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
