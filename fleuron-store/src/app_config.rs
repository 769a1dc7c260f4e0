use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub anthropic: AnthropicSettings,
    pub email: EmailSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_ai_timeout")]
    pub timeout_seconds: u64,
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_ai_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailSettings {
    pub api_key: String,
    pub from: String,
    #[serde(default)]
    pub designer_emails: Vec<String>,
    #[serde(default)]
    pub receptionist_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific overrides, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. FLEURON__SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("FLEURON").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
