use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_LOBBY_URL: &str = "https://np.ironhelmet.com/mrequest/open_games";
pub const DEFAULT_REQUEST_TYPE: &str = "open_games";

#[derive(Debug, Clone, Deserialize)]
pub struct LobbyConfig {
    pub url: String,
    pub request_type: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Unset means the HTTP client default (no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl LobbyConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_type: DEFAULT_REQUEST_TYPE.to_string(),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub lobby: LobbyConfig,
    pub logging: LoggingConfig,
    /// Display title overrides, keyed by category key.
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = Self::defaults()?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Built-in values every file and env source layers over.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("lobby.url", DEFAULT_LOBBY_URL)?
            .set_default("lobby.request_type", DEFAULT_REQUEST_TYPE)?
            .set_default("logging.level", "warn")
    }
}
