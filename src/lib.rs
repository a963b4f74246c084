pub mod modules;
pub mod schema;
pub mod shared;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use modules::jobs::application::ports::{ChangeFeed, ChangePublisher};
use modules::jobs::infrastructure::{BroadcastChangeFeed, JobRepositoryImpl, NotifyingJobRepository};
use modules::jobs::realtime::{JobsMirror, MirrorScope};
use modules::jobs::{routes, JobRepository, JobUseCases};
use shared::errors::{AppError, AppResult};
use shared::utils::logger::init_logger;
use shared::{AppConfig, Database};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The wired job board: use cases, change feed and mirror factory
///
/// Every mutation made through [`JobBoard::use_cases`] is announced on the
/// feed, so mirrors built by [`JobBoard::mirror`] follow the store.
#[derive(Clone)]
pub struct JobBoard {
    repository: Arc<dyn JobRepository>,
    feed: Arc<BroadcastChangeFeed>,
    use_cases: Arc<JobUseCases>,
}

impl JobBoard {
    pub fn new(store: Arc<dyn JobRepository>, feed_capacity: usize) -> Self {
        let feed = Arc::new(BroadcastChangeFeed::new(feed_capacity));
        let publisher: Arc<dyn ChangePublisher> = feed.clone();

        // Decorator Pattern: notification is transparent to the use cases
        let repository: Arc<dyn JobRepository> =
            Arc::new(NotifyingJobRepository::new(store, publisher));
        let use_cases = Arc::new(JobUseCases::new(Arc::clone(&repository)));

        Self {
            repository,
            feed,
            use_cases,
        }
    }

    pub fn use_cases(&self) -> Arc<JobUseCases> {
        Arc::clone(&self.use_cases)
    }

    pub fn feed(&self) -> Arc<dyn ChangeFeed> {
        self.feed.clone()
    }

    /// A new, inactive mirror over this board
    pub fn mirror(&self, scope: MirrorScope) -> JobsMirror {
        JobsMirror::new(Arc::clone(&self.repository), self.feed(), scope)
    }

    pub fn router(&self, cors_origins: &[String]) -> Router {
        build_router(self.use_cases(), cors_origins)
    }
}

pub fn build_router(use_cases: Arc<JobUseCases>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api/jobs", routes::router(use_cases))
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log_warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}

pub fn run_migrations(database: &Database) -> AppResult<()> {
    let mut conn = database.get_connection()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Persistence(format!("Failed to run database migrations: {}", e)))?;

    log_info!("Database migrations completed ({} applied)", applied.len());
    Ok(())
}

/// Connect, migrate and serve until Ctrl-C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    init_logger();
    log_info!("Starting job board ({})", config.app_env);

    let database = Arc::new(Database::connect(
        &config.database_url,
        config.database_max_connections,
    )?);
    run_migrations(&database)?;

    let store: Arc<dyn JobRepository> = Arc::new(JobRepositoryImpl::new(Arc::clone(&database)));
    let board = JobBoard::new(store, config.feed_capacity);
    let app = board.router(&config.cors_origins);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    log_info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_info!("Received Ctrl-C, shutting down"),
        Err(err) => log_error!("Failed to listen for Ctrl-C signal: {}", err),
    }
}
