use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn connect(database_url: &str, max_connections: Option<u32>) -> Result<Self, AppError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool_config = Self::pool_config(max_connections);
        let pool = r2d2::Pool::builder()
            .max_size(pool_config.max_size)
            .min_idle(Some(pool_config.min_idle))
            // Time to wait for connection from pool
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::ServiceUnavailable(format!("Failed to create connection pool: {}", e))
            })?;

        // Log the target without exposing credentials
        log_info!(
            "Database connection pool initialized for {} (max_size: {}, min_idle: {})",
            database_url.split('@').last().unwrap_or("unknown_host"),
            pool.max_size(),
            pool_config.min_idle
        );

        Ok(Self { pool })
    }

    fn pool_config(max_connections: Option<u32>) -> PoolConfig {
        let max_size = max_connections.unwrap_or_else(|| {
            let cpu_count = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4);
            std::cmp::min(cpu_count * 2, 20) as u32
        });
        let max_size = max_size.max(1);
        let min_idle = std::cmp::min(std::cmp::max(1, max_size / 4), max_size);

        PoolConfig { max_size, min_idle }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }
}

#[derive(Debug, PartialEq)]
struct PoolConfig {
    max_size: u32,
    min_idle: u32,
}
