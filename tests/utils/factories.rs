/// Test data factories using builder pattern
///
/// Provides convenient methods to create job payloads with sensible defaults
use jobboard_lib::modules::jobs::domain::{JobDraft, NewJob};

pub struct JobDraftFactory {
    draft: JobDraft,
}

impl JobDraftFactory {
    pub fn new(title: &str) -> Self {
        Self {
            draft: JobDraft {
                title: title.to_string(),
                team: "Engineering".to_string(),
                location: "Lagos, Nigeria".to_string(),
                employment_type: "Full-time".to_string(),
                level: "Senior".to_string(),
                description: "Build and maintain APIs.".to_string(),
                requirements: vec!["5+ years experience".to_string()],
                responsibilities: vec!["Own the API layer".to_string()],
            },
        }
    }

    /// The "Backend Engineer" posting used across scenarios
    pub fn backend_engineer() -> Self {
        Self::new("Backend Engineer")
    }

    pub fn team(mut self, team: &str) -> Self {
        self.draft.team = team.to_string();
        self
    }

    pub fn employment_type(mut self, employment_type: &str) -> Self {
        self.draft.employment_type = employment_type.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.draft.level = level.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.draft.description = description.to_string();
        self
    }

    pub fn requirements(mut self, requirements: &[&str]) -> Self {
        self.draft.requirements = requirements.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn draft(self) -> JobDraft {
        self.draft
    }

    pub fn build(self) -> NewJob {
        self.draft.validate().expect("factory payload must be valid")
    }

    pub fn json(self) -> serde_json::Value {
        let draft = self.draft;
        serde_json::json!({
            "title": draft.title,
            "team": draft.team,
            "location": draft.location,
            "type": draft.employment_type,
            "level": draft.level,
            "description": draft.description,
            "requirements": draft.requirements,
            "responsibilities": draft.responsibilities,
        })
    }
}
