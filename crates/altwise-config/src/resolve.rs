//! Per-key merge of overrides, file values and environment.

use std::collections::HashMap;

use altwise_protocols::{ClientConfig, ProviderTag, detect_provider};
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::{FileConfig, HttpConfig};

pub const ENV_API_KEY: &str = "ALTWISE_API_KEY";
pub const ENV_ENDPOINT: &str = "ALTWISE_ENDPOINT";
pub const ENV_MODEL: &str = "ALTWISE_MODEL";
pub const ENV_USE_VISION: &str = "ALTWISE_USE_VISION";

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Values given explicitly by the caller, e.g. command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub use_vision: Option<bool>,
}

/// Everything the pipeline needs, fully resolved.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub client: ClientConfig,
    pub http: HttpConfig,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn first_present(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates.into_iter().find_map(present)
}

/// Vendor variables accepted as a key fallback for an endpoint.
fn vendor_key_vars(endpoint: Option<&str>) -> &'static [&'static str] {
    match endpoint.map(detect_provider) {
        Some(ProviderTag::OpenaiLike) => &["OPENAI_API_KEY"],
        Some(ProviderTag::AnthropicLike) => &["ANTHROPIC_API_KEY"],
        Some(ProviderTag::GoogleLike) => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
        Some(ProviderTag::Unknown) | None => &[],
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a boolean, got `{}`", raw),
        }),
    }
}

/// Merge the three layers into a [`ResolvedConfig`].
pub fn resolve(
    overrides: &ConfigOverrides,
    file: &FileConfig,
    env: &dyn EnvSource,
) -> Result<ResolvedConfig, ConfigError> {
    let endpoint = first_present([
        overrides.endpoint.clone(),
        file.client.endpoint.clone(),
        env.var(ENV_ENDPOINT),
    ]);

    let vendor_keys = vendor_key_vars(endpoint.as_deref())
        .iter()
        .map(|name| env.var(name));
    let api_key = first_present(
        [
            overrides.api_key.clone(),
            file.client.api_key.clone(),
            env.var(ENV_API_KEY),
        ]
        .into_iter()
        .chain(vendor_keys),
    );

    let model = first_present([
        overrides.model.clone(),
        file.client.model.clone(),
        env.var(ENV_MODEL),
    ]);

    let use_vision = match overrides.use_vision.or(file.client.use_vision) {
        Some(value) => value,
        None => match present(env.var(ENV_USE_VISION)) {
            Some(raw) => parse_bool(ENV_USE_VISION, &raw)?,
            None => false,
        },
    };

    let client = ClientConfig {
        api_key,
        endpoint,
        model,
        use_vision,
    };
    debug!(
        endpoint = client.endpoint.as_deref().unwrap_or("-"),
        has_key = client.api_key.is_some(),
        use_vision,
        "resolved client config"
    );

    Ok(ResolvedConfig {
        client,
        http: file.http.clone(),
    })
}
