use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
    pub domain: String,
    /// Always the single-element list `[domain]`.
    pub domains: Vec<String>,
    pub global: bool,
}

impl Organization {
    pub fn new(id: u32, name: String, domain: String, global: bool) -> Self {
        Self {
            id,
            name,
            domains: vec![domain.clone()],
            domain,
            global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_mirror_domain() {
        let org = Organization::new(1001, "Acme Inc".to_string(), "acme.com".to_string(), false);
        assert_eq!(org.domains, vec!["acme.com".to_string()]);
        assert_eq!(org.domain, "acme.com");
    }

    #[test]
    fn test_organization_serialization() {
        let org = Organization::new(1001, "Acme Inc".to_string(), "acme.com".to_string(), true);
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1001,
                "name": "Acme Inc",
                "domain": "acme.com",
                "domains": ["acme.com"],
                "global": true
            })
        );
    }
}
