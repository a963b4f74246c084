/// Diesel-based implementation of JobRepository
///
/// Blocking Diesel calls run on the blocking pool. Timestamps and identifiers
/// are assigned by PostgreSQL (column defaults and the `updated_at` trigger).
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;
use uuid::Uuid;

use super::mapper;
use super::models::JobRow;
use crate::modules::jobs::domain::{Job, JobRepository, JobUpdate, NewJob};
use crate::schema::jobs;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;
use crate::log_debug;

pub struct JobRepositoryImpl {
    db: Arc<Database>,
}

impl JobRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn load_ordered(&self, active_only: bool) -> AppResult<Vec<Job>> {
        let db = Arc::clone(&self.db);
        let start = std::time::Instant::now();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<JobRow>> {
            let mut conn = db.get_connection()?;

            let mut query = jobs::table
                .select(JobRow::as_select())
                .order((jobs::created_at.desc(), jobs::id.desc()))
                .into_boxed();
            if active_only {
                query = query.filter(jobs::is_active.eq(true));
            }

            query.load(&mut conn).map_err(|e| {
                AppError::Persistence(format!("Failed to fetch jobs: {}", e))
            })
        })
        .await??;

        LogContext::db_operation(
            if active_only { "select active" } else { "select all" },
            "jobs",
            Some(start.elapsed().as_millis() as u64),
        );
        mapper::rows_to_entities(rows)
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Job>> {
        self.load_ordered(false).await
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        self.load_ordered(true).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<JobRow>> {
            let mut conn = db.get_connection()?;

            match jobs::table
                .find(id)
                .select(JobRow::as_select())
                .first(&mut conn)
            {
                Ok(row) => Ok(Some(row)),
                Err(diesel::result::Error::NotFound) => Ok(None),
                Err(e) => Err(AppError::Persistence(format!(
                    "Failed to fetch job {}: {}",
                    id, e
                ))),
            }
        })
        .await??;

        row.map(mapper::row_to_entity).transpose()
    }

    async fn create(&self, job: NewJob) -> AppResult<Job> {
        let db = Arc::clone(&self.db);
        let new_row = mapper::new_job_to_row(job);

        let inserted = task::spawn_blocking(move || -> AppResult<JobRow> {
            let mut conn = db.get_connection()?;

            diesel::insert_into(jobs::table)
                .values(&new_row)
                .returning(JobRow::as_returning())
                .get_result(&mut conn)
                .map_err(|e| AppError::Persistence(format!("Failed to create job: {}", e)))
        })
        .await??;

        log_debug!("Inserted job row {}", inserted.id);
        mapper::row_to_entity(inserted)
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>> {
        if update.is_empty() {
            // Nothing to write; answer with the current state
            return self.find_by_id(id).await;
        }

        let db = Arc::clone(&self.db);
        let changeset = mapper::update_to_changeset(update);

        let row = task::spawn_blocking(move || -> AppResult<Option<JobRow>> {
            let mut conn = db.get_connection()?;

            match diesel::update(jobs::table.find(id))
                .set(&changeset)
                .returning(JobRow::as_returning())
                .get_result(&mut conn)
            {
                Ok(row) => Ok(Some(row)),
                Err(diesel::result::Error::NotFound) => Ok(None),
                Err(e) => Err(AppError::Persistence(format!(
                    "Failed to update job {}: {}",
                    id, e
                ))),
            }
        })
        .await??;

        row.map(mapper::row_to_entity).transpose()
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            diesel::delete(jobs::table.find(id))
                .execute(&mut conn)
                .map_err(|e| AppError::Persistence(format!("Failed to delete job {}: {}", id, e)))
        })
        .await??;

        Ok(deleted > 0)
    }
}
