use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use config::{Config, ConfigError, Environment, File};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://bad-otzyvy.net";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X x.y; rv:10.0) Gecko/20100101 Firefox/10.0";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_headers")]
    pub headers: HashMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            headers: default_headers(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_headers() -> HashMap<String, String> {
    HashMap::from([(
        "Content-Type".to_string(),
        "text/html; charset=utf-8".to_string(),
    )])
}

impl Settings {
    /// Loads `config/default.*` when present, then `APP_*` environment overrides
    /// (`APP_SITE__BASE_URL=...`).
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::build(builder.build()?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from(path.as_ref()));

        Self::build(builder.build()?)
    }

    fn build(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.site.base_url,
            user_agent = %settings.api.user_agent,
            headers = ?settings.api.headers,
            "Loaded settings"
        );

        Ok(settings)
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}
