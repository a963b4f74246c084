/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to a migrated test database. Tests using it
/// are `#[ignore]`d and run only when TEST_DATABASE_URL points at a server.
use diesel::prelude::*;
use jobboard_lib::shared::Database;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static DATABASE: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the singleton test database (migrations applied once)
pub fn get_test_database() -> Arc<Database> {
    DATABASE
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let url = std::env::var("TEST_DATABASE_URL")
                .expect("TEST_DATABASE_URL must be set in .env for tests");

            let database = Database::connect(&url, Some(4)).expect("Failed to connect to test database");
            jobboard_lib::run_migrations(&database).expect("Failed to migrate test database");
            Arc::new(database)
        })
        .clone()
}

/// Clean the jobs table - use at the start of each test
pub fn clean_test_db() {
    let database = get_test_database();
    let mut conn = database.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE jobs")
        .execute(&mut conn)
        .expect("Failed to clean jobs");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
