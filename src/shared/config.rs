/// Application configuration loaded from the environment
///
/// `.env` is read first (if present) so local development does not need
/// exported variables. The resulting value is passed explicitly into the
/// server bootstrap; nothing reads the environment after startup.
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_FEED_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_env: String,
    pub database_url: String,
    pub database_max_connections: Option<u32>,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub feed_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::InvalidInput("Missing required environment variable: DATABASE_URL".to_string())
        })?;
        validate_database_url(&database_url)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::InvalidInput(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let feed_capacity = match lookup("JOBS_FEED_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(AppError::InvalidInput(format!(
                        "Invalid JOBS_FEED_CAPACITY '{}': expected a positive integer",
                        raw
                    )))
                }
                Ok(capacity) => capacity,
            },
            None => DEFAULT_FEED_CAPACITY,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|e| {
                AppError::InvalidInput(format!("Invalid DATABASE_MAX_CONNECTIONS '{}': {}", raw, e))
            })?),
            None => None,
        };

        let config = Self {
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            database_url,
            database_max_connections,
            port,
            cors_origins: parse_cors_origins(lookup("CORS_ORIGIN").as_deref()),
            feed_capacity,
        };

        log_info!(
            "Configuration loaded (env: {}, port: {}, cors origins: {})",
            config.app_env,
            config.port,
            config.cors_origins.join(", ")
        );

        Ok(config)
    }
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::InvalidInput(
            "Invalid DATABASE_URL format. Must start with postgres:// or postgresql://".to_string(),
        ));
    }
    Ok(())
}

fn parse_cors_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_CORS_ORIGIN.to_string()]
    } else {
        origins
    }
}
