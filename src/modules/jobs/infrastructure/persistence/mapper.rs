/// Conversion between jobs table rows and domain entities
///
/// Column names and storage types differ from the domain (`job_type` vs
/// `employment_type`, Postgres enums and free text vs domain enums); all of
/// that translation lives here, in both directions.
use crate::modules::jobs::domain::{EmploymentType, Job, JobUpdate, NewJob, SeniorityLevel};
use crate::shared::errors::{AppError, AppResult};

use super::models::{JobChangeset, JobLevelDb, JobRow, JobTypeDb, NewJobRow};

impl From<EmploymentType> for JobTypeDb {
    fn from(value: EmploymentType) -> Self {
        match value {
            EmploymentType::FullTime => JobTypeDb::FullTime,
            EmploymentType::PartTime => JobTypeDb::PartTime,
            EmploymentType::Contract => JobTypeDb::Contract,
            EmploymentType::Internship => JobTypeDb::Internship,
        }
    }
}

impl From<JobTypeDb> for EmploymentType {
    fn from(value: JobTypeDb) -> Self {
        match value {
            JobTypeDb::FullTime => EmploymentType::FullTime,
            JobTypeDb::PartTime => EmploymentType::PartTime,
            JobTypeDb::Contract => EmploymentType::Contract,
            JobTypeDb::Internship => EmploymentType::Internship,
        }
    }
}

impl From<SeniorityLevel> for JobLevelDb {
    fn from(value: SeniorityLevel) -> Self {
        match value {
            SeniorityLevel::Junior => JobLevelDb::Junior,
            SeniorityLevel::MidLevel => JobLevelDb::MidLevel,
            SeniorityLevel::Senior => JobLevelDb::Senior,
            SeniorityLevel::Lead => JobLevelDb::Lead,
            SeniorityLevel::Manager => JobLevelDb::Manager,
        }
    }
}

impl From<JobLevelDb> for SeniorityLevel {
    fn from(value: JobLevelDb) -> Self {
        match value {
            JobLevelDb::Junior => SeniorityLevel::Junior,
            JobLevelDb::MidLevel => SeniorityLevel::MidLevel,
            JobLevelDb::Senior => SeniorityLevel::Senior,
            JobLevelDb::Lead => SeniorityLevel::Lead,
            JobLevelDb::Manager => SeniorityLevel::Manager,
        }
    }
}

/// Convert a stored row into the domain entity
///
/// Free-text columns are checked against the domain's fixed sets; a label the
/// domain does not know means the row was written outside this adapter.
pub fn row_to_entity(row: JobRow) -> AppResult<Job> {
    let team = row.team.parse().map_err(|e: String| corrupt_row(&row.id, "team", &e))?;
    let location = row
        .location
        .parse()
        .map_err(|e: String| corrupt_row(&row.id, "location", &e))?;

    Ok(Job {
        id: row.id,
        title: row.title,
        team,
        location,
        employment_type: row.job_type.into(),
        level: row.job_level.into(),
        description: row.description,
        requirements: row.requirements,
        responsibilities: row.responsibilities,
        is_active: row.is_active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn rows_to_entities(rows: Vec<JobRow>) -> AppResult<Vec<Job>> {
    rows.into_iter().map(row_to_entity).collect()
}

pub fn new_job_to_row(job: NewJob) -> NewJobRow {
    NewJobRow {
        title: job.title,
        team: job.team.as_str().to_string(),
        location: job.location.as_str().to_string(),
        job_type: job.employment_type.into(),
        job_level: job.level.into(),
        description: job.description,
        requirements: job.requirements,
        responsibilities: job.responsibilities,
    }
}

pub fn update_to_changeset(update: JobUpdate) -> JobChangeset {
    JobChangeset {
        title: update.title.into_option(),
        team: update.team.map(|t| t.as_str().to_string()).into_option(),
        location: update.location.map(|l| l.as_str().to_string()).into_option(),
        job_type: update.employment_type.map(JobTypeDb::from).into_option(),
        job_level: update.level.map(JobLevelDb::from).into_option(),
        description: update.description.into_option(),
        requirements: update.requirements.into_option(),
        responsibilities: update.responsibilities.into_option(),
        is_active: update.is_active.into_option(),
    }
}

fn corrupt_row(id: &uuid::Uuid, column: &str, reason: &str) -> AppError {
    AppError::Persistence(format!("Job {} has an invalid {} value: {}", id, column, reason))
}
