use blogspace_types::{Post, User};

/// Which authenticated subview is on screen. Pure UI state, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Posts,
    Compose,
    Profile,
}

/// Controller-owned state shared with every view.
///
/// `posts` is always a direct reflection of the last successful fetch.
/// Mutating operations trigger a full re-fetch instead of patching it.
#[derive(Debug, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub posts: Vec<Post>,
    pub view: View,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the current user may delete the given post. Always false
    /// while unauthenticated.
    pub fn can_delete(&self, post: &Post) -> bool {
        self.user
            .as_ref()
            .map(|user| post.is_owned_by(user.id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogspace_types::Post;

    fn post_by(author_id: i64) -> Post {
        Post {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
            author_id,
            author: None,
        }
    }

    #[test]
    fn test_default_view_is_posts() {
        let state = AppState::default();
        assert_eq!(state.view, View::Posts);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_can_delete_only_own_posts() {
        let mut state = AppState::default();
        assert!(!state.can_delete(&post_by(5)));

        state.user = Some(User {
            id: 5,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
        });
        assert!(state.can_delete(&post_by(5)));
        assert!(!state.can_delete(&post_by(6)));
    }
}
