use serde::{Deserialize, Serialize};

/// Maximum number of characters shown in a post preview before the
/// ellipsis marker is appended.
pub const PREVIEW_LIMIT: usize = 200;

/// Embedded author record on a post. The server may omit it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// A blog post as returned by the listing endpoint.
///
/// The collection is always a direct reflection of the last successful
/// fetch; nothing here is mutated locally after a create or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Post {
    /// Author display name, falling back when the server omits the record.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("Anonymous")
    }

    /// Content capped at [`PREVIEW_LIMIT`] characters, with an ellipsis
    /// marker when anything was cut. Content at or under the limit is
    /// returned unmodified.
    pub fn preview(&self) -> String {
        if self.content.chars().count() <= PREVIEW_LIMIT {
            self.content.clone()
        } else {
            let head: String = self.content.chars().take(PREVIEW_LIMIT).collect();
            format!("{}...", head)
        }
    }

    /// Whether the given user id may delete this post.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_content(content: String) -> Post {
        Post {
            id: 1,
            title: "t".to_string(),
            content,
            author_id: 1,
            author: None,
        }
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let post = post_with_content("x".repeat(250));
        let preview = post.preview();
        assert_eq!(preview.chars().count(), PREVIEW_LIMIT + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..PREVIEW_LIMIT], "x".repeat(PREVIEW_LIMIT));
    }

    #[test]
    fn test_preview_leaves_short_content_unmodified() {
        let post = post_with_content("y".repeat(150));
        assert_eq!(post.preview(), "y".repeat(150));
    }

    #[test]
    fn test_preview_at_exact_limit_has_no_ellipsis() {
        let post = post_with_content("z".repeat(PREVIEW_LIMIT));
        assert_eq!(post.preview(), "z".repeat(PREVIEW_LIMIT));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let post = post_with_content("é".repeat(201));
        let preview = post.preview();
        assert_eq!(preview.chars().count(), PREVIEW_LIMIT + 3);
    }

    #[test]
    fn test_author_name_falls_back_to_anonymous() {
        let mut post = post_with_content("c".to_string());
        assert_eq!(post.author_name(), "Anonymous");

        post.author = Some(Author {
            name: "Ada".to_string(),
        });
        assert_eq!(post.author_name(), "Ada");
    }

    #[test]
    fn test_post_deserializes_without_author() {
        let json = r#"{"id": 3, "title": "Hello", "content": "World", "author_id": 9}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 3);
        assert!(post.author.is_none());
        assert!(post.is_owned_by(9));
        assert!(!post.is_owned_by(10));
    }
}
