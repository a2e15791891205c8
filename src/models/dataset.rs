use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Opportunity, Organization, Person};
use crate::error::{GenerateError, Result};

/// Root object written to the fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub organizations: Vec<Organization>,
    pub persons: Vec<Person>,
    pub opportunities: Vec<Opportunity>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub organizations: usize,
    pub persons: usize,
    pub opportunities: usize,
    /// Opportunities whose person is not linked to the opportunity's organization
    pub fallback_links: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} organizations, {} persons, {} opportunities",
            self.organizations, self.persons, self.opportunities
        )
    }
}

impl Dataset {
    /// Read a previously written dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> DatasetSummary {
        let fallback_links = self
            .opportunities
            .iter()
            .filter(|opp| match (opp.organization_id(), opp.person_id()) {
                (Some(org_id), Some(person_id)) => !self
                    .person(person_id)
                    .map_or(false, |p| p.belongs_to(org_id)),
                _ => false,
            })
            .count();

        DatasetSummary {
            organizations: self.organizations.len(),
            persons: self.persons.len(),
            opportunities: self.opportunities.len(),
            fallback_links,
        }
    }

    pub fn organization(&self, id: u32) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    pub fn person(&self, id: u32) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
