//! User account model.
//!
//! Accounts are created and mutated by external CRUD handlers; the engine
//! only joins them for display names and account roles. Locations, areas,
//! and organizations appear in this crate as scoping IDs on the records
//! that reference them.

use serde::{Deserialize, Serialize};

/// An account in the system, linked to an employee profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The user's account role (e.g. "manager" or "employee").
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "user_001",
            "name": "Alice Nguyen",
            "role": "manager"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Alice Nguyen");
        assert_eq!(user.role, "manager");
    }

    #[test]
    fn test_user_round_trip() {
        let user = User {
            id: "user_001".to_string(),
            name: "Alice Nguyen".to_string(),
            role: "employee".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }
}
