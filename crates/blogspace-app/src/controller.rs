//! Session-scoped controller.
//!
//! Owns the bearer token, the current-user record, the post
//! collection, and the view selector. Views never call the API
//! themselves; they hand the controller a [`Command`] and react to the
//! returned [`Outcome`].

use blogspace_client::{BlogApi, Error as ApiError, NewPost, SignupRequest};

use crate::session::TokenStore;
use crate::state::{AppState, View};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_NETWORK_ERROR: &str = "Network error. Please try again.";
pub const MSG_SIGNUP_FAILED: &str = "Signup failed";
pub const MSG_ACCOUNT_CREATED: &str = "Account created! Please login.";

/// Everything a view can ask the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Signup { email: String, password: String, name: String },
    Navigate(View),
    RefreshPosts,
    CreatePost { title: String, content: String },
    DeletePost { id: i64 },
    Logout,
}

/// What happened, so the view layer can surface messages or move on.
///
/// `Failed` covers the silent-failure floor: the error was already
/// logged and the UI keeps showing whatever state it had.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    LoggedIn,
    LoginFailed(String),
    SignupAccepted(String),
    SignupFailed(String),
    Navigated(View),
    Refreshed,
    PostPublished,
    PostDeleted,
    LoggedOut,
    Failed,
}

pub struct Controller<A: BlogApi, S: TokenStore> {
    api: A,
    store: S,
    clear_stale_token: bool,
    token: Option<String>,
    pub state: AppState,
}

impl<A: BlogApi, S: TokenStore> Controller<A, S> {
    pub fn new(api: A, store: S, clear_stale_token: bool) -> Self {
        Self {
            api,
            store,
            clear_stale_token,
            token: None,
            state: AppState::default(),
        }
    }

    /// Resume a stored session, if any.
    ///
    /// A failed profile fetch is logged, never surfaced; whether the
    /// stale token is removed from storage follows the
    /// `clear_stale_token` policy. The post list is fetched whenever a
    /// token was present, matching the hosted client.
    pub fn startup(&mut self) {
        let token = match self.store.load() {
            Ok(token) => token,
            Err(err) => {
                eprintln!("blogspace: failed to read token store: {}", err);
                None
            }
        };
        let Some(token) = token else {
            return;
        };

        match self.api.profile(&token) {
            Ok(user) => {
                self.state.user = Some(user);
                self.token = Some(token);
            }
            Err(err) => {
                eprintln!("blogspace: startup profile fetch failed: {}", err);
                if self.clear_stale_token {
                    if let Err(err) = self.store.clear() {
                        eprintln!("blogspace: failed to clear stale token: {}", err);
                    }
                } else {
                    self.token = Some(token);
                }
            }
        }

        self.refresh_posts();
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Login { email, password } => self.login(&email, &password),
            Command::Signup { email, password, name } => self.signup(email, password, name),
            Command::Navigate(view) => {
                self.state.view = view;
                Outcome::Navigated(view)
            }
            Command::RefreshPosts => {
                if self.refresh_posts() {
                    Outcome::Refreshed
                } else {
                    Outcome::Failed
                }
            }
            Command::CreatePost { title, content } => self.create_post(title, content),
            Command::DeletePost { id } => self.delete_post(id),
            Command::Logout => self.logout(),
        }
    }

    fn login(&mut self, email: &str, password: &str) -> Outcome {
        let token = match self.api.login(email, password) {
            Ok(token) => token,
            Err(err) => return Outcome::LoginFailed(auth_failure_message(&err)),
        };

        if let Err(err) = self.store.store(&token) {
            // Session still works in memory; only resuming is affected.
            eprintln!("blogspace: failed to persist token: {}", err);
        }

        match self.api.profile(&token) {
            Ok(user) => {
                self.token = Some(token);
                self.state.user = Some(user);
                self.state.view = View::Posts;
                self.refresh_posts();
                Outcome::LoggedIn
            }
            Err(err) => {
                eprintln!("blogspace: profile fetch after login failed: {}", err);
                Outcome::LoginFailed(auth_failure_message(&err))
            }
        }
    }

    fn signup(&mut self, email: String, password: String, name: String) -> Outcome {
        let request = SignupRequest { email, password, name };
        match self.api.signup(&request) {
            Ok(()) => Outcome::SignupAccepted(MSG_ACCOUNT_CREATED.to_string()),
            Err(err) => Outcome::SignupFailed(signup_failure_message(&err)),
        }
    }

    fn create_post(&mut self, title: String, content: String) -> Outcome {
        let Some(token) = self.token.clone() else {
            eprintln!("blogspace: create post without an active session");
            return Outcome::Failed;
        };

        let post = NewPost { title, content };
        match self.api.create_post(&token, &post) {
            Ok(()) => {
                self.refresh_posts();
                self.state.view = View::Posts;
                Outcome::PostPublished
            }
            Err(err) => {
                eprintln!("blogspace: create post failed: {}", err);
                Outcome::Failed
            }
        }
    }

    fn delete_post(&mut self, id: i64) -> Outcome {
        let Some(token) = self.token.clone() else {
            eprintln!("blogspace: delete post without an active session");
            return Outcome::Failed;
        };

        match self.api.delete_post(&token, id) {
            Ok(()) => {
                self.refresh_posts();
                Outcome::PostDeleted
            }
            Err(err) => {
                eprintln!("blogspace: delete post {} failed: {}", id, err);
                Outcome::Failed
            }
        }
    }

    fn logout(&mut self) -> Outcome {
        if let Err(err) = self.store.clear() {
            eprintln!("blogspace: failed to clear stored token: {}", err);
        }
        self.token = None;
        self.state.user = None;
        self.state.view = View::Posts;
        Outcome::LoggedOut
    }

    /// Replace the post collection with a fresh fetch. On failure the
    /// previous collection stands and the error is logged only.
    fn refresh_posts(&mut self) -> bool {
        match self.api.list_posts() {
            Ok(posts) => {
                self.state.posts = posts;
                true
            }
            Err(err) => {
                eprintln!("blogspace: post list fetch failed: {}", err);
                false
            }
        }
    }
}

fn auth_failure_message(err: &ApiError) -> String {
    if err.is_network() {
        MSG_NETWORK_ERROR.to_string()
    } else {
        MSG_INVALID_CREDENTIALS.to_string()
    }
}

fn signup_failure_message(err: &ApiError) -> String {
    if err.is_network() {
        MSG_NETWORK_ERROR.to_string()
    } else {
        err.detail()
            .unwrap_or(MSG_SIGNUP_FAILED)
            .to_string()
    }
}
