pub mod api;
pub mod error;
pub mod schema;

pub use api::{BlogApi, HttpApi};
pub use error::{Error, Result};
pub use schema::{NewPost, SignupRequest};
