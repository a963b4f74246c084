/// Diesel models for the jobs table
use crate::schema::jobs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Storage form of the employment type (`job_type` enum in Postgres)
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::JobType"]
pub enum JobTypeDb {
    #[db_rename = "Full-time"]
    FullTime,
    #[db_rename = "Part-time"]
    PartTime,
    #[db_rename = "Contract"]
    Contract,
    #[db_rename = "Internship"]
    Internship,
}

/// Storage form of the seniority level (`job_level` enum in Postgres)
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::JobLevel"]
pub enum JobLevelDb {
    #[db_rename = "Junior"]
    Junior,
    #[db_rename = "Mid-level"]
    MidLevel,
    #[db_rename = "Senior"]
    Senior,
    #[db_rename = "Lead"]
    Lead,
    #[db_rename = "Manager"]
    Manager,
}

/// Diesel model for querying existing rows
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub team: String,
    pub location: String,
    pub job_type: JobTypeDb,
    pub job_level: JobLevelDb,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Diesel model for inserting new rows; id, flag and timestamps use column defaults
#[derive(Insertable, Debug)]
#[diesel(table_name = jobs)]
pub struct NewJobRow {
    pub title: String,
    pub team: String,
    pub location: String,
    pub job_type: JobTypeDb,
    pub job_level: JobLevelDb,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
}

/// Partial update; `None` columns are left out of the UPDATE statement
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = jobs)]
pub struct JobChangeset {
    pub title: Option<String>,
    pub team: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobTypeDb>,
    pub job_level: Option<JobLevelDb>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
