use serde::{Deserialize, Serialize};

use super::{Organization, Person};

/// Membership of an opportunity in an external list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: u32,
    pub list_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub name: String,
    pub organization_ids: Vec<u32>,
    pub person_ids: Vec<u32>,
    pub list_entries: Vec<ListEntry>,
}

impl Opportunity {
    /// Build an opportunity for one organization and, when available, one person.
    pub fn new(
        id: u32,
        organization: &Organization,
        deal_type: &str,
        person: Option<&Person>,
        list_entry: ListEntry,
    ) -> Self {
        Self {
            id,
            name: format!("{} - {}", organization.name, deal_type),
            organization_ids: vec![organization.id],
            person_ids: person.map(|p| p.id).into_iter().collect(),
            list_entries: vec![list_entry],
        }
    }

    pub fn organization_id(&self) -> Option<u32> {
        self.organization_ids.first().copied()
    }

    pub fn person_id(&self) -> Option<u32> {
        self.person_ids.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonType;

    fn org() -> Organization {
        Organization::new(1003, "Hills Group".to_string(), "hills.io".to_string(), false)
    }

    #[test]
    fn test_opportunity_name() {
        let opp = Opportunity::new(3001, &org(), "Series A", None, ListEntry { id: 5001, list_id: 888 });
        assert_eq!(opp.name, "Hills Group - Series A");
        assert_eq!(opp.organization_ids, vec![1003]);
        assert_eq!(opp.organization_id(), Some(1003));
    }

    #[test]
    fn test_opportunity_without_person() {
        let opp = Opportunity::new(3001, &org(), "Equity Round", None, ListEntry { id: 5001, list_id: 888 });
        assert!(opp.person_ids.is_empty());
        assert_eq!(opp.person_id(), None);
    }

    #[test]
    fn test_opportunity_with_person() {
        let person = Person::new(
            2005,
            PersonType::External,
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace_hopper@yahoo.com".to_string(),
            vec![1003],
        );
        let opp = Opportunity::new(
            3002,
            &org(),
            "Strategic Partnership",
            Some(&person),
            ListEntry { id: 5002, list_id: 888 },
        );
        assert_eq!(opp.person_ids, vec![2005]);

        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["list_entries"], serde_json::json!([{ "id": 5002, "list_id": 888 }]));
    }
}
