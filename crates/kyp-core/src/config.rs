//! Service configuration.
//!
//! Configuration is read from a TOML file. Every field has a default, so a
//! missing file or a partial file is valid. The file is located by
//! [`KypConfig::resolve_config_path`]:
//!
//! 1. an explicit path (e.g. `--config`)
//! 2. the `KYP_CONFIG` environment variable
//! 3. `<platform config dir>/kyp/config.toml`
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [completion]
//! api_key = "sk-..."
//! model = "gpt-4"
//! timeout_secs = 5
//!
//! [store]
//! path = "/var/lib/kyp/catalog.json"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "kyp";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KYP_CONFIG";

/// Instruction sent with every keyword-extraction request.
pub const DEFAULT_KEYWORD_PROMPT: &str = "You are a helpful assistant that extracts the few most \
relevant keywords from the user's search query. Return a JSON array of lowercase keyword \
strings, and nothing else.";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KypConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion service settings.
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Record storage settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Completion service settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible API, without the trailing
    /// `/chat/completions`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token. Completion-assisted search is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Output length cap for each completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on a single completion call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// System instruction for keyword extraction.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Record storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON catalog file. An in-memory catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_system_prompt() -> String {
    DEFAULT_KEYWORD_PROMPT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl CompletionConfig {
    /// Returns `true` when a non-blank API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Completion call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// The API key must never reach logs.
impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl KypConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Priority: explicit path, then `KYP_CONFIG`, then the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.trim().is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. When the path comes from the environment
    /// or the platform default and the file is missing, defaults are used.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
