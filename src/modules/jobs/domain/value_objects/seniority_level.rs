use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    Senior,
    Lead,
    Manager,
}

impl SeniorityLevel {
    pub const ALL: [SeniorityLevel; 5] = [
        SeniorityLevel::Junior,
        SeniorityLevel::MidLevel,
        SeniorityLevel::Senior,
        SeniorityLevel::Lead,
        SeniorityLevel::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::MidLevel => "Mid-level",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Lead => "Lead",
            SeniorityLevel::Manager => "Manager",
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeniorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| {
                format!(
                    "Level must be one of Junior, Mid-level, Senior, Lead, Manager (got '{}')",
                    s
                )
            })
    }
}
