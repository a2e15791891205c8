//! Dataset generation.
//!
//! Organizations are generated first, then persons linked to one or more
//! organizations, then opportunities linking one organization and one of its
//! persons.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::faker::Faker;
use crate::models::{Dataset, ListEntry, Opportunity, Organization, Person, PersonType};

/// Pick from `primary`, or from `fallback` when `primary` is empty.
///
/// `select` chooses one element from whichever pool is used.
pub fn pick_with_fallback<'a, T, F>(primary: &'a [T], fallback: &'a [T], select: F) -> Option<&'a T>
where
    F: FnOnce(&'a [T]) -> Option<&'a T>,
{
    let pool = if primary.is_empty() { fallback } else { primary };
    select(pool)
}

pub struct Generator {
    config: GeneratorConfig,
    faker: Faker,
}

impl Generator {
    pub fn new(config: GeneratorConfig, faker: Faker) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, faker })
    }

    /// Generate a dataset stamped with the current time.
    pub fn generate(&mut self) -> Result<Dataset> {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&mut self, updated_at: DateTime<Utc>) -> Result<Dataset> {
        let organizations = self.organizations();
        let persons = self.persons(&organizations)?;
        let opportunities = self.opportunities(&organizations, &persons)?;

        info!(
            organizations = organizations.len(),
            persons = persons.len(),
            opportunities = opportunities.len(),
            "dataset generated"
        );

        Ok(Dataset {
            organizations,
            persons,
            opportunities,
            updated_at,
        })
    }

    fn organizations(&mut self) -> Vec<Organization> {
        (1..=self.config.organization_count)
            .map(|i| {
                let name = self.faker.company_name();
                let domain = self.faker.domain_name();
                let global = self.faker.boolean(self.config.global_probability);
                Organization::new(self.config.organization_id_offset + i, name, domain, global)
            })
            .collect()
    }

    fn persons(&mut self, organizations: &[Organization]) -> Result<Vec<Person>> {
        let mut persons = Vec::with_capacity(self.config.person_count as usize);

        for i in 1..=self.config.person_count {
            let first_name = self.faker.first_name();
            let last_name = self.faker.last_name();
            let email = self.faker.email(&first_name, &last_name);

            let organization_ids: Vec<u32> = self
                .faker
                .sample(
                    organizations,
                    self.config.min_organizations_per_person,
                    self.config.max_organizations_per_person,
                )
                .into_iter()
                .map(|o| o.id)
                .collect();
            if organization_ids.is_empty() {
                return Err(GenerateError::EmptyPool("organization"));
            }

            let person_type = if self.faker.boolean(0.5) {
                PersonType::Internal
            } else {
                PersonType::External
            };

            persons.push(Person::new(
                self.config.person_id_offset + i,
                person_type,
                first_name,
                last_name,
                email,
                organization_ids,
            ));
        }

        Ok(persons)
    }

    fn opportunities(
        &mut self,
        organizations: &[Organization],
        persons: &[Person],
    ) -> Result<Vec<Opportunity>> {
        let everyone: Vec<&Person> = persons.iter().collect();
        let mut opportunities = Vec::with_capacity(self.config.opportunity_count as usize);

        for i in 1..=self.config.opportunity_count {
            let organization = self
                .faker
                .pick(organizations)
                .ok_or(GenerateError::EmptyPool("organization"))?;

            let candidates: Vec<&Person> = persons
                .iter()
                .filter(|p| p.belongs_to(organization.id))
                .collect();
            if candidates.is_empty() {
                debug!(organization = organization.id, "no linked persons, using full pool");
            }

            let faker = &mut self.faker;
            let person = pick_with_fallback(&candidates, &everyone, |pool| faker.pick(pool)).copied();

            let deal_type = self
                .faker
                .pick(&self.config.deal_types)
                .ok_or(GenerateError::EmptyPool("deal type"))?;

            opportunities.push(Opportunity::new(
                self.config.opportunity_id_offset + i,
                organization,
                deal_type,
                person,
                ListEntry {
                    id: self.config.list_entry_id_offset + i,
                    list_id: self.config.list_id,
                },
            ));
        }

        Ok(opportunities)
    }
}

/// Serialize the dataset and write it to `path`, replacing any existing file.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let json = dataset.to_json_pretty()?;
    std::fs::write(path, json).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "dataset written");
    Ok(())
}
