//! Generator configuration.
//!
//! Every count, id offset and label set used by the generator lives here.
//! The defaults reproduce the standard fixture file; a JSON file may override
//! any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

pub const DEFAULT_OUTPUT_PATH: &str = "affinity_db.json";

pub const DEFAULT_DEAL_TYPES: &[&str] = &["Series A", "Equity Round", "Strategic Partnership"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub organization_count: u32,
    pub person_count: u32,
    pub opportunity_count: u32,
    /// Organization ids are `organization_id_offset + i` for i in 1..=count
    pub organization_id_offset: u32,
    pub person_id_offset: u32,
    pub opportunity_id_offset: u32,
    pub list_entry_id_offset: u32,
    pub list_id: u32,
    pub deal_types: Vec<String>,
    pub min_organizations_per_person: usize,
    pub max_organizations_per_person: usize,
    /// Probability that an organization is flagged `global`
    pub global_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            organization_count: 160,
            person_count: 200,
            opportunity_count: 150,
            organization_id_offset: 1000,
            person_id_offset: 2000,
            opportunity_id_offset: 3000,
            list_entry_id_offset: 5000,
            list_id: 888,
            deal_types: DEFAULT_DEAL_TYPES.iter().map(|s| s.to_string()).collect(),
            min_organizations_per_person: 1,
            max_organizations_per_person: 2,
            global_probability: 0.3,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.organization_count == 0 {
            return Err(invalid("organization_count must be at least 1"));
        }
        if self.deal_types.is_empty() {
            return Err(invalid("deal_types must not be empty"));
        }
        if self.min_organizations_per_person == 0 {
            return Err(invalid("min_organizations_per_person must be at least 1"));
        }
        if self.min_organizations_per_person > self.max_organizations_per_person {
            return Err(invalid(format!(
                "min_organizations_per_person ({}) exceeds max_organizations_per_person ({})",
                self.min_organizations_per_person, self.max_organizations_per_person
            )));
        }
        if self.max_organizations_per_person > self.organization_count as usize {
            return Err(invalid(format!(
                "max_organizations_per_person ({}) exceeds organization_count ({})",
                self.max_organizations_per_person, self.organization_count
            )));
        }
        if !(0.0..=1.0).contains(&self.global_probability) {
            return Err(invalid(format!(
                "global_probability must be within [0, 1], got {}",
                self.global_probability
            )));
        }
        self.validate_id_ranges()
    }

    /// Ids of each kind occupy `offset + 1..=offset + count`.
    fn validate_id_ranges(&self) -> Result<()> {
        let ranges = [
            ("organization", self.organization_id_offset, self.organization_count),
            ("person", self.person_id_offset, self.person_count),
            ("opportunity", self.opportunity_id_offset, self.opportunity_count),
            ("list_entry", self.list_entry_id_offset, self.opportunity_count),
        ];

        for (kind, offset, count) in ranges {
            if offset.checked_add(count).is_none() {
                return Err(invalid(format!(
                    "{}_id_offset ({}) plus count ({}) overflows u32",
                    kind, offset, count
                )));
            }
        }

        // List entries are a separate id space.
        let entities = &ranges[..3];
        for (i, &(a, a_offset, a_count)) in entities.iter().enumerate() {
            for &(b, b_offset, b_count) in &entities[i + 1..] {
                if a_count == 0 || b_count == 0 {
                    continue;
                }
                if a_offset < b_offset + b_count && b_offset < a_offset + a_count {
                    return Err(invalid(format!("{} and {} id ranges overlap", a, b)));
                }
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GenerateError {
    GenerateError::InvalidConfig(msg.into())
}
