/// Payload validation for job postings
///
/// Drafts carry raw, untrusted input (straight from JSON). Validation is
/// pure: it never touches storage and reports every violated field.
use serde::Deserialize;

use super::entities::{JobUpdate, NewJob};
use super::value_objects::{EmploymentType, FieldUpdate, Location, SeniorityLevel, Team};
use crate::shared::validation::{FieldValidator, FieldViolation, ValidationErrors};

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Raw creation payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: String,
    pub team: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub level: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
}

impl JobDraft {
    pub fn validate(self) -> Result<NewJob, ValidationErrors> {
        let mut v = FieldValidator::new();

        v.text_length("title", "Title", &self.title, TITLE_MIN_CHARS, Some(TITLE_MAX_CHARS));
        let team = v.parse::<Team, _>("team", self.team.parse());
        let location = v.parse::<Location, _>("location", self.location.parse());
        let employment_type = v.parse::<EmploymentType, _>("type", self.employment_type.parse());
        let level = v.parse::<SeniorityLevel, _>("level", self.level.parse());
        v.text_length(
            "description",
            "Description",
            &self.description,
            DESCRIPTION_MIN_CHARS,
            None,
        );
        v.string_list("requirements", "requirement", &self.requirements);
        v.string_list("responsibilities", "responsibility", &self.responsibilities);

        match (team, location, employment_type, level, v.finish()) {
            (Some(team), Some(location), Some(employment_type), Some(level), Ok(())) => Ok(NewJob {
                title: self.title.trim().to_string(),
                team,
                location,
                employment_type,
                level,
                description: self.description,
                requirements: self.requirements,
                responsibilities: self.responsibilities,
            }),
            (.., Err(errors)) => Err(errors),
            // a failed parse always records a violation
            _ => Err(ValidationErrors::from(vec![FieldViolation::new(
                "payload",
                "Incomplete job payload",
            )])),
        }
    }
}

/// Raw partial-update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPatchDraft {
    pub title: Option<String>,
    pub team: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl JobPatchDraft {
    pub fn validate(self) -> Result<JobUpdate, ValidationErrors> {
        let mut v = FieldValidator::new();

        if let Some(title) = &self.title {
            v.text_length("title", "Title", title, TITLE_MIN_CHARS, Some(TITLE_MAX_CHARS));
        }
        let team = self
            .team
            .as_deref()
            .and_then(|raw| v.parse::<Team, _>("team", raw.parse()));
        let location = self
            .location
            .as_deref()
            .and_then(|raw| v.parse::<Location, _>("location", raw.parse()));
        let employment_type = self
            .employment_type
            .as_deref()
            .and_then(|raw| v.parse::<EmploymentType, _>("type", raw.parse()));
        let level = self
            .level
            .as_deref()
            .and_then(|raw| v.parse::<SeniorityLevel, _>("level", raw.parse()));
        if let Some(description) = &self.description {
            v.text_length("description", "Description", description, DESCRIPTION_MIN_CHARS, None);
        }
        if let Some(requirements) = &self.requirements {
            v.string_list("requirements", "requirement", requirements);
        }
        if let Some(responsibilities) = &self.responsibilities {
            v.string_list("responsibilities", "responsibility", responsibilities);
        }

        v.finish()?;

        Ok(JobUpdate {
            title: FieldUpdate::from(self.title).map(|t| t.trim().to_string()),
            team: team.into(),
            location: location.into(),
            employment_type: employment_type.into(),
            level: level.into(),
            description: self.description.into(),
            requirements: self.requirements.into(),
            responsibilities: self.responsibilities.into(),
            is_active: self.is_active.into(),
        })
    }
}
