use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What happened to the job collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
    /// Notifications were dropped; the collection must be re-read
    Resync,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Insert => write!(f, "insert"),
            ChangeKind::Update => write!(f, "update"),
            ChangeKind::Delete => write!(f, "delete"),
            ChangeKind::Resync => write!(f, "resync"),
        }
    }
}

/// Notification that the job collection changed
///
/// Subscribers treat it purely as a trigger. The payload is informational
/// and carries no ordering or delivery guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobChange {
    pub kind: ChangeKind,
    pub job_id: Option<Uuid>,
}

impl JobChange {
    pub fn inserted(job_id: Uuid) -> Self {
        Self {
            kind: ChangeKind::Insert,
            job_id: Some(job_id),
        }
    }

    pub fn updated(job_id: Uuid) -> Self {
        Self {
            kind: ChangeKind::Update,
            job_id: Some(job_id),
        }
    }

    pub fn deleted(job_id: Uuid) -> Self {
        Self {
            kind: ChangeKind::Delete,
            job_id: Some(job_id),
        }
    }

    pub fn resync() -> Self {
        Self {
            kind: ChangeKind::Resync,
            job_id: None,
        }
    }
}

impl fmt::Display for JobChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.job_id {
            Some(id) => write!(f, "{} {}", self.kind, id),
            None => write!(f, "{}", self.kind),
        }
    }
}
