use serde::{Deserialize, Serialize};

/// Successful login body.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Rejection body shape shared by the API's error responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Payload for account creation.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Payload for publishing a post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_requires_access_token() {
        let ok: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(ok.access_token, "abc");

        let missing: Result<TokenResponse, _> = serde_json::from_str(r#"{"token": "abc"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail": "taken"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("taken"));

        let without: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(without.detail.is_none());
    }

    #[test]
    fn test_new_post_serializes_expected_shape() {
        let post = NewPost {
            title: "T".to_string(),
            content: "C".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "content": "C"}));
    }
}
