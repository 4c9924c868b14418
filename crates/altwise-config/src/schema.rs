//! Configuration file schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root of `altwise.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub client: ClientSection,

    #[serde(default)]
    pub http: HttpConfig,
}

/// `[client]` table. Every key is optional; absent keys fall through to
/// the environment.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub use_vision: Option<bool>,
}

impl fmt::Debug for ClientSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSection")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("use_vision", &self.use_vision)
            .finish()
    }
}

/// `[http]` table: transport knobs kept out of `ClientConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    altwise_protocols::provider::DEFAULT_MAX_TOKENS
}
