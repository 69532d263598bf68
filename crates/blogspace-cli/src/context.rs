use anyhow::Result;
use blogspace_app::{Config, FileTokenStore};
use blogspace_client::HttpApi;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Lazily resolved per-invocation environment: data directory, config,
/// and the API client built from them.
pub struct ExecutionContext {
    data_dir: PathBuf,
    api_url_override: Option<String>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, api_url_override: Option<String>) -> Self {
        Self {
            data_dir,
            api_url_override,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Ok(Config::load_from(&config_path)?)
        })
    }

    pub fn api_base_url(&self) -> Result<String> {
        if let Some(url) = &self.api_url_override {
            return Ok(url.clone());
        }
        Ok(self.config()?.api_base_url.clone())
    }

    pub fn api(&self) -> Result<HttpApi> {
        Ok(HttpApi::new(self.api_base_url()?)?)
    }

    pub fn token_store(&self) -> FileTokenStore {
        FileTokenStore::new(&self.data_dir)
    }
}
