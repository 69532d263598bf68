use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::schema::{ErrorBody, NewPost, SignupRequest, TokenResponse};
use blogspace_types::{Post, User};

/// The six remote operations the client depends on.
///
/// `HttpApi` is the real implementation; tests drive the controller
/// with in-memory fakes instead.
pub trait BlogApi {
    /// Exchange credentials for a bearer token.
    fn login(&self, email: &str, password: &str) -> Result<String>;

    /// Fetch the account record behind a bearer token.
    fn profile(&self, token: &str) -> Result<User>;

    /// Create a new account.
    fn signup(&self, request: &SignupRequest) -> Result<()>;

    /// Fetch every post, in server order.
    fn list_posts(&self) -> Result<Vec<Post>>;

    /// Publish a post as the token's owner.
    fn create_post(&self, token: &str, post: &NewPost) -> Result<()>;

    /// Delete a post owned by the token's owner.
    fn delete_post(&self, token: &str, id: i64) -> Result<()>;
}

pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("blogspace/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl BlogApi for HttpApi {
    fn login(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/login"))
            .form(&[("username", email), ("password", password)])
            .send()?;

        if !response.status().is_success() {
            return Err(Error::InvalidCredentials);
        }

        let body: TokenResponse = parse_json(response)?;
        Ok(body.access_token)
    }

    fn profile(&self, token: &str) -> Result<User> {
        let response = self
            .client
            .get(self.url("/me"))
            .bearer_auth(token)
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        parse_json(response)
    }

    fn signup(&self, request: &SignupRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url("/signup"))
            .json(request)
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        Ok(())
    }

    fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .client
            .get(self.url("/blogs"))
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        parse_json(response)
    }

    fn create_post(&self, token: &str, post: &NewPost) -> Result<()> {
        let response = self
            .client
            .post(self.url("/blogs"))
            .bearer_auth(token)
            .json(post)
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        Ok(())
    }

    fn delete_post(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/blogs/{}", id)))
            .bearer_auth(token)
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        Ok(())
    }
}

/// Map a non-success response to `Rejected`, keeping the server's
/// `detail` field when the body carries one.
fn rejection(response: Response) -> Error {
    let status = response.status().as_u16();
    let detail = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.detail);
    Error::Rejected { status, detail }
}

/// Parse a success body, surfacing schema violations as `Malformed`
/// instead of propagating missing fields.
fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json().map_err(|err| Error::Malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let api = HttpApi::new("http://127.0.0.1:1/").unwrap();
        assert_eq!(api.url("/blogs"), "http://127.0.0.1:1/blogs");
    }

    #[test]
    fn test_url_joins_path_with_id() {
        let api = HttpApi::new("http://127.0.0.1:1").unwrap();
        assert_eq!(api.url(&format!("/blogs/{}", 42)), "http://127.0.0.1:1/blogs/42");
    }
}
