use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::jobs::domain::value_objects::{
    EmploymentType, FieldUpdate, Location, SeniorityLevel, Team,
};

/// One job posting as held by the authoritative store
///
/// `id`, `created_at` and `updated_at` are assigned by the store. Instances
/// only come out of a repository, so the field invariants established by
/// [`NewJob`]/[`JobUpdate`] hold for every value in circulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub team: Team,
    pub location: Location,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub level: SeniorityLevel,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Whether the posting shows up on the public listing
    pub fn is_public(&self) -> bool {
        self.is_active
    }

    /// True when every payload-derived field matches `payload`
    pub fn matches_payload(&self, payload: &NewJob) -> bool {
        self.title == payload.title
            && self.team == payload.team
            && self.location == payload.location
            && self.employment_type == payload.employment_type
            && self.level == payload.level
            && self.description == payload.description
            && self.requirements == payload.requirements
            && self.responsibilities == payload.responsibilities
    }
}

/// Validated creation payload
///
/// Built only through [`JobDraft::validate`](crate::modules::jobs::domain::JobDraft::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub(crate) title: String,
    pub(crate) team: Team,
    pub(crate) location: Location,
    pub(crate) employment_type: EmploymentType,
    pub(crate) level: SeniorityLevel,
    pub(crate) description: String,
    pub(crate) requirements: Vec<String>,
    pub(crate) responsibilities: Vec<String>,
}

impl NewJob {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }

    pub fn level(&self) -> SeniorityLevel {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    pub fn responsibilities(&self) -> &[String] {
        &self.responsibilities
    }

    /// Materialize the entity once the store has assigned identity and timestamps
    pub fn into_job(self, id: Uuid, stamped_at: DateTime<Utc>) -> Job {
        Job {
            id,
            title: self.title,
            team: self.team,
            location: self.location,
            employment_type: self.employment_type,
            level: self.level,
            description: self.description,
            requirements: self.requirements,
            responsibilities: self.responsibilities,
            is_active: true,
            created_at: stamped_at,
            updated_at: stamped_at,
        }
    }
}

/// Validated partial update; every attribute is either kept or replaced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub(crate) title: FieldUpdate<String>,
    pub(crate) team: FieldUpdate<Team>,
    pub(crate) location: FieldUpdate<Location>,
    pub(crate) employment_type: FieldUpdate<EmploymentType>,
    pub(crate) level: FieldUpdate<SeniorityLevel>,
    pub(crate) description: FieldUpdate<String>,
    pub(crate) requirements: FieldUpdate<Vec<String>>,
    pub(crate) responsibilities: FieldUpdate<Vec<String>>,
    pub(crate) is_active: FieldUpdate<bool>,
}

impl JobUpdate {
    /// Update that changes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Update touching only the active flag
    pub fn set_active(is_active: bool) -> Self {
        Self {
            is_active: FieldUpdate::Set(is_active),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.title.is_set()
            || self.team.is_set()
            || self.location.is_set()
            || self.employment_type.is_set()
            || self.level.is_set()
            || self.description.is_set()
            || self.requirements.is_set()
            || self.responsibilities.is_set()
            || self.is_active.is_set())
    }

    pub fn title(&self) -> &FieldUpdate<String> {
        &self.title
    }

    pub fn team(&self) -> &FieldUpdate<Team> {
        &self.team
    }

    pub fn location(&self) -> &FieldUpdate<Location> {
        &self.location
    }

    pub fn employment_type(&self) -> &FieldUpdate<EmploymentType> {
        &self.employment_type
    }

    pub fn level(&self) -> &FieldUpdate<SeniorityLevel> {
        &self.level
    }

    pub fn description(&self) -> &FieldUpdate<String> {
        &self.description
    }

    pub fn requirements(&self) -> &FieldUpdate<Vec<String>> {
        &self.requirements
    }

    pub fn responsibilities(&self) -> &FieldUpdate<Vec<String>> {
        &self.responsibilities
    }

    pub fn is_active(&self) -> &FieldUpdate<bool> {
        &self.is_active
    }

    /// Apply onto an in-memory entity; returns whether any attribute was written.
    /// `updated_at` is left to the store.
    pub fn apply_to(self, job: &mut Job) -> bool {
        let mut changed = false;
        changed |= self.title.apply_to(&mut job.title);
        changed |= self.team.apply_to(&mut job.team);
        changed |= self.location.apply_to(&mut job.location);
        changed |= self.employment_type.apply_to(&mut job.employment_type);
        changed |= self.level.apply_to(&mut job.level);
        changed |= self.description.apply_to(&mut job.description);
        changed |= self.requirements.apply_to(&mut job.requirements);
        changed |= self.responsibilities.apply_to(&mut job.responsibilities);
        changed |= self.is_active.apply_to(&mut job.is_active);
        changed
    }
}

/// Public listing projection of a [`Job`]
///
/// Same entity, fewer attributes; only built for active postings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicJob {
    pub id: Uuid,
    pub title: String,
    pub team: Team,
    pub location: Location,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub level: SeniorityLevel,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl PublicJob {
    /// Project a job for the public listing, `None` when it is not active
    pub fn project(job: Job) -> Option<Self> {
        if !job.is_public() {
            return None;
        }
        Some(Self {
            id: job.id,
            title: job.title,
            team: job.team,
            location: job.location,
            employment_type: job.employment_type,
            level: job.level,
            description: job.description,
            requirements: job.requirements,
            responsibilities: job.responsibilities,
            is_active: job.is_active,
            created_at: job.created_at,
        })
    }
}
