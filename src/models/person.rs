use serde::{Deserialize, Serialize};

/// Relationship of a person to the owning team. Serialized as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PersonType {
    External,
    Internal,
}

impl From<PersonType> for u8 {
    fn from(t: PersonType) -> Self {
        match t {
            PersonType::External => 0,
            PersonType::Internal => 1,
        }
    }
}

impl TryFrom<u8> for PersonType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::External),
            1 => Ok(Self::Internal),
            _ => Err(format!("unknown person type: {}", v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    #[serde(rename = "type")]
    pub person_type: PersonType,
    pub first_name: String,
    pub last_name: String,
    pub primary_email: String,
    pub emails: Vec<String>,
    pub organization_ids: Vec<u32>,
}

impl Person {
    pub fn new(
        id: u32,
        person_type: PersonType,
        first_name: String,
        last_name: String,
        primary_email: String,
        organization_ids: Vec<u32>,
    ) -> Self {
        Self {
            id,
            person_type,
            first_name,
            last_name,
            emails: vec![primary_email.clone()],
            primary_email,
            organization_ids,
        }
    }

    /// Check whether this person is linked to the given organization
    pub fn belongs_to(&self, organization_id: u32) -> bool {
        self.organization_ids.contains(&organization_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person::new(
            2001,
            PersonType::Internal,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada.lovelace@gmail.com".to_string(),
            vec![1001, 1007],
        )
    }

    #[test]
    fn test_person_type_serialization() {
        assert_eq!(serde_json::to_string(&PersonType::External).unwrap(), "0");
        assert_eq!(serde_json::to_string(&PersonType::Internal).unwrap(), "1");

        let t: PersonType = serde_json::from_str("1").unwrap();
        assert_eq!(t, PersonType::Internal);
        assert!(serde_json::from_str::<PersonType>("2").is_err());
    }

    #[test]
    fn test_emails_mirror_primary() {
        let person = sample_person();
        assert_eq!(person.emails, vec![person.primary_email.clone()]);
    }

    #[test]
    fn test_belongs_to() {
        let person = sample_person();
        assert!(person.belongs_to(1001));
        assert!(person.belongs_to(1007));
        assert!(!person.belongs_to(1002));
    }

    #[test]
    fn test_type_field_name() {
        let json = serde_json::to_value(sample_person()).unwrap();
        assert_eq!(json["type"], 1);
        assert!(json.get("person_type").is_none());
        assert_eq!(json["organization_ids"], serde_json::json!([1001, 1007]));
    }
}
