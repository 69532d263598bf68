use serde::{Deserialize, Serialize};

/// The signed-in account, as returned by the profile endpoint.
///
/// Owned by the session controller; views only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_profile_response() {
        let json = r#"{"id": 7, "name": "Ada", "email": "ada@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_user_rejects_missing_fields() {
        let json = r#"{"id": 7, "name": "Ada"}"#;
        let result: Result<User, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
