//! Client configuration handed to the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved credentials and mode for one pipeline.
///
/// Built once by a configuration collaborator and passed by value; the
/// pipeline never reads ambient state itself.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub use_vision: bool,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            endpoint: Some(endpoint.into()),
            model: None,
            use_vision: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_vision(mut self, use_vision: bool) -> Self {
        self.use_vision = use_vision;
        self
    }

    /// Endpoint and API key, when both are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let endpoint = non_blank(self.endpoint.as_deref())?;
        let api_key = non_blank(self.api_key.as_deref())?;
        Some((endpoint, api_key))
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }

    /// Model name, when configured and non-blank.
    pub fn model(&self) -> Option<&str> {
        non_blank(self.model.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("use_vision", &self.use_vision)
            .finish()
    }
}
