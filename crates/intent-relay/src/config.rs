use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::llm::{GoogleProvider, OpenAIProvider, Provider};

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }

    /// Overlay `PORT` and `SERVERLESS` from the environment.
    ///
    /// `lookup` is `std::env::var(..).ok()` in the binary.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: port,
            })?;
        }

        if let Some(flag) = lookup("SERVERLESS") {
            self.server.serverless = parse_flag(&flag).ok_or(ConfigError::InvalidEnv {
                name: "SERVERLESS",
                value: flag,
            })?;
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "" | "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Directory holding the single-page UI served for non-API paths.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// When set, the binary builds the app but leaves socket binding to the host platform.
    #[serde(default)]
    pub serverless: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            static_dir: default_static_dir(),
            serverless: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    300
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

// ============================================================================
// ProvidersConfig
// ============================================================================

/// Upstream endpoints. Credentials never live here; see [`Credentials`].
#[derive(Debug, Default, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub openai: OpenAIConfig,
}

#[derive(Debug, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_google_base_url")]
    pub base_url: String,
    #[serde(default = "default_google_model")]
    pub model: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_base_url(),
            model: default_google_model(),
        }
    }
}

fn default_google_base_url() -> String {
    GoogleProvider::DEFAULT_BASE_URL.to_string()
}

fn default_google_model() -> String {
    GoogleProvider::DEFAULT_MODEL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            model: default_openai_model(),
        }
    }
}

fn default_openai_base_url() -> String {
    OpenAIProvider::DEFAULT_BASE_URL.to_string()
}

fn default_openai_model() -> String {
    OpenAIProvider::DEFAULT_MODEL.to_string()
}

// ============================================================================
// Credentials
// ============================================================================

/// Provider API keys, read once at startup. Empty values count as absent.
#[derive(Clone, Default)]
pub struct Credentials {
    google_api_key: Option<String>,
    openai_api_key: Option<String>,
}

impl Credentials {
    pub const GOOGLE_ENV: &'static str = "GOOGLE_API_KEY";
    pub const OPENAI_ENV: &'static str = "OPENAI_API_KEY";

    pub fn new(google_api_key: Option<String>, openai_api_key: Option<String>) -> Self {
        Self {
            google_api_key: google_api_key.filter(|k| !k.is_empty()),
            openai_api_key: openai_api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(lookup(Self::GOOGLE_ENV), lookup(Self::OPENAI_ENV))
    }

    pub fn google_api_key(&self) -> Option<&str> {
        self.google_api_key.as_deref()
    }

    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    /// Which provider these credentials select.
    pub fn provider(&self) -> Provider {
        Provider::select(self.google_api_key.is_some(), self.openai_api_key.is_some())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("google_api_key", &redact(&self.google_api_key))
            .field("openai_api_key", &redact(&self.openai_api_key))
            .finish()
    }
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

// ============================================================================
// Tests
// ============================================================================
