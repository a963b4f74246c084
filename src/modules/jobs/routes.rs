use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::application::JobUseCases;
use super::domain::{Job, JobDraft, JobPatchDraft, PublicJob};
use crate::shared::errors::{ApiError, AppError};
use crate::{log_debug, log_info};

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn data<T: Serialize>(value: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data: value })
}

/// Routes for `/api/jobs`, nested by the application router
pub fn router(use_cases: Arc<JobUseCases>) -> Router {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/active", get(list_active_jobs))
        .route("/:id", get(get_job).patch(update_job).delete(delete_job))
        .route("/:id/toggle", patch(toggle_job))
        .with_state(use_cases)
}

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidInput(format!("Invalid job id: {}", raw)).into())
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()).into())
}

fn job_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Job {} not found", id))
}

pub async fn list_jobs(
    State(use_cases): State<Arc<JobUseCases>>,
) -> ApiResult<Json<DataResponse<Vec<Job>>>> {
    let jobs = use_cases.list_jobs().await?;
    Ok(data(jobs))
}

pub async fn list_active_jobs(
    State(use_cases): State<Arc<JobUseCases>>,
) -> ApiResult<Json<DataResponse<Vec<PublicJob>>>> {
    let jobs = use_cases.list_active_jobs().await?;
    Ok(data(jobs.into_iter().filter_map(PublicJob::project).collect()))
}

pub async fn get_job(
    State(use_cases): State<Arc<JobUseCases>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Job>>> {
    let id = parse_id(&id)?;
    log_debug!("Fetching job {}", id);

    match use_cases.get_job(id).await? {
        Some(job) => Ok(data(job)),
        None => Err(job_not_found(id)),
    }
}

pub async fn create_job(
    State(use_cases): State<Arc<JobUseCases>>,
    payload: Result<Json<JobDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_job = body(payload)?.validate().map_err(AppError::from)?;
    log_info!("Creating job '{}'", new_job.title());

    let job = use_cases.create_job(new_job).await?;
    Ok((StatusCode::CREATED, data(job)))
}

pub async fn update_job(
    State(use_cases): State<Arc<JobUseCases>>,
    Path(id): Path<String>,
    payload: Result<Json<JobPatchDraft>, JsonRejection>,
) -> ApiResult<Json<DataResponse<Job>>> {
    let id = parse_id(&id)?;
    let changes = body(payload)?.validate().map_err(AppError::from)?;

    match use_cases.update_job(id, changes).await? {
        Some(job) => Ok(data(job)),
        None => Err(job_not_found(id)),
    }
}

pub async fn delete_job(
    State(use_cases): State<Arc<JobUseCases>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    if use_cases.delete_job(id).await? {
        Ok(Json(MessageResponse {
            message: "Job deleted successfully".to_string(),
        }))
    } else {
        Err(job_not_found(id))
    }
}

pub async fn toggle_job(
    State(use_cases): State<Arc<JobUseCases>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Job>>> {
    let id = parse_id(&id)?;

    match use_cases.toggle_job(id).await? {
        Some(job) => Ok(data(job)),
        None => Err(job_not_found(id)),
    }
}
