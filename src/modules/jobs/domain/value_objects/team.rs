use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hiring team a posting belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Engineering,
    Product,
    Design,
    #[serde(rename = "Marketing & Sales")]
    MarketingAndSales,
    #[serde(rename = "Data Science")]
    DataScience,
    Operations,
    #[serde(rename = "Legal & Compliance")]
    LegalAndCompliance,
    Finance,
    #[serde(rename = "People & Culture")]
    PeopleAndCulture,
}

impl Team {
    pub const ALL: [Team; 9] = [
        Team::Engineering,
        Team::Product,
        Team::Design,
        Team::MarketingAndSales,
        Team::DataScience,
        Team::Operations,
        Team::LegalAndCompliance,
        Team::Finance,
        Team::PeopleAndCulture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Engineering => "Engineering",
            Team::Product => "Product",
            Team::Design => "Design",
            Team::MarketingAndSales => "Marketing & Sales",
            Team::DataScience => "Data Science",
            Team::Operations => "Operations",
            Team::LegalAndCompliance => "Legal & Compliance",
            Team::Finance => "Finance",
            Team::PeopleAndCulture => "People & Culture",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Team is required".to_string());
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown team '{}'", s))
    }
}
