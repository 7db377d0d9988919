//! Configuration loaded from ideaforge.toml and environment variables

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const MIN_TIMEOUT_MS: u64 = 1_000;
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Runtime configuration loaded from environment variables, never from the file
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Endpoint settings for the generative-text API
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// The credential never lives in the TOML file
    pub gemini_api_key: Option<String>,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            log_level: "idea_forge=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "idea_forge=info".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses FORGE_CONFIG environment variable or defaults to "ideaforge.toml".
    pub fn load() -> Result<Self> {
        // Load environment variables with smart fallbacks:
        // 1) FORGE_ENV_FILE if set
        // 2) ./.env
        // 3) ../.env (repo root when running from a subdirectory)
        if let Ok(env_path) = std::env::var("FORGE_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
            if std::env::var("GEMINI_API_KEY").is_err() {
                let _ = dotenvy::from_path("../.env");
            }
        }

        let config_path =
            std::env::var("FORGE_CONFIG").unwrap_or_else(|_| "ideaforge.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content).map_err(|e| ForgeError::Config {
                message: format!("Failed to parse {}: {}", config_path, e),
            })?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides for the API endpoint (env-first)
        if let Ok(base_url) = std::env::var("FORGE_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(model) = std::env::var("FORGE_MODEL") {
            config.api.model = model;
        }
        if let Some(timeout_ms) = std::env::var("FORGE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.api.timeout_ms = timeout_ms;
        }

        // Load runtime configuration from environment variables
        config.runtime = RuntimeConfig::load_from_env();

        config.validate();
        Ok(config)
    }

    /// Clamp out-of-range values rather than failing startup
    fn validate(&mut self) {
        if self.api.timeout_ms < MIN_TIMEOUT_MS {
            tracing::warn!(
                "timeout_ms {} below minimum {}, clamping",
                self.api.timeout_ms,
                MIN_TIMEOUT_MS
            );
            self.api.timeout_ms = MIN_TIMEOUT_MS;
        } else if self.api.timeout_ms > MAX_TIMEOUT_MS {
            tracing::warn!(
                "timeout_ms {} exceeds maximum {}, clamping",
                self.api.timeout_ms,
                MAX_TIMEOUT_MS
            );
            self.api.timeout_ms = MAX_TIMEOUT_MS;
        }

        // A trailing slash would double up in the endpoint URL
        while self.api.base_url.ends_with('/') {
            self.api.base_url.pop();
        }
    }

    /// The API key from the environment, rejecting placeholder-shaped values
    pub fn api_key(&self) -> Result<String> {
        match self.runtime.gemini_api_key.as_deref() {
            Some(key) if !is_placeholder(key) => Ok(key.trim().to_string()),
            _ => Err(ForgeError::Config {
                message: "GEMINI_API_KEY is not set; export it or put it in a .env file"
                    .to_string(),
            }),
        }
    }
}

fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}
