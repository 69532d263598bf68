pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod state;

pub use config::{Config, resolve_data_dir};
pub use controller::{Command, Controller, Outcome};
pub use error::{Error, Result};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use state::{AppState, View};
