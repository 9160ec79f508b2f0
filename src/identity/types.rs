//! Identity directory type definitions

use serde::{Deserialize, Serialize};

/// User representation returned by the directory Backend API
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<DirectoryEmailAddress>,
}

/// One email address attached to a directory user
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEmailAddress {
    pub id: String,
    pub email_address: String,
}

impl DirectoryUser {
    /// Resolve the primary email address.
    ///
    /// The directory only references the primary address by ID, so a missing
    /// ID or a dangling reference both yield `None`.
    pub fn primary_email(&self) -> Option<&str> {
        let primary_id = self.primary_email_address_id.as_deref()?;
        self.email_addresses
            .iter()
            .find(|e| e.id == primary_id)
            .map(|e| e.email_address.as_str())
    }
}

/// The subset of a directory user that the access guards read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub primary_email: Option<String>,
}

impl From<DirectoryUser> for UserProfile {
    fn from(user: DirectoryUser) -> Self {
        let primary_email = user.primary_email().map(str::to_string);
        Self {
            id: user.id,
            primary_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primary_email_resolved_by_id() {
        let user: DirectoryUser = serde_json::from_value(json!({
            "id": "user_123",
            "primary_email_address_id": "idn_2",
            "email_addresses": [
                { "id": "idn_1", "email_address": "old@example.com" },
                { "id": "idn_2", "email_address": "admin@example.com" }
            ]
        }))
        .unwrap();

        assert_eq!(user.primary_email(), Some("admin@example.com"));
    }

    #[test]
    fn test_primary_email_missing_id() {
        let user: DirectoryUser = serde_json::from_value(json!({
            "id": "user_123",
            "primary_email_address_id": null,
            "email_addresses": [
                { "id": "idn_1", "email_address": "someone@example.com" }
            ]
        }))
        .unwrap();

        assert_eq!(user.primary_email(), None);
    }

    #[test]
    fn test_primary_email_dangling_reference() {
        let user: DirectoryUser = serde_json::from_value(json!({
            "id": "user_123",
            "primary_email_address_id": "idn_gone",
            "email_addresses": []
        }))
        .unwrap();

        assert_eq!(user.primary_email(), None);
    }

    #[test]
    fn test_minimal_user_deserializes() {
        let user: DirectoryUser = serde_json::from_value(json!({ "id": "user_123" })).unwrap();
        let profile = UserProfile::from(user);

        assert_eq!(profile.id, "user_123");
        assert_eq!(profile.primary_email, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let user: DirectoryUser = serde_json::from_value(json!({
            "id": "user_123",
            "object": "user",
            "first_name": "Ada",
            "primary_email_address_id": "idn_1",
            "email_addresses": [
                {
                    "id": "idn_1",
                    "object": "email_address",
                    "email_address": "ada@example.com",
                    "verification": { "status": "verified" }
                }
            ]
        }))
        .unwrap();

        let profile = UserProfile::from(user);
        assert_eq!(profile.primary_email.as_deref(), Some("ada@example.com"));
    }
}
