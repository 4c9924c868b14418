//! Outbound request shape shared by all adapters.

use serde_json::Value;

/// Default completion budget for suggestion requests.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature used for every suggestion request.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// System instruction sent alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str = "Você é um especialista em acessibilidade digital \
(WCAG 2.1, critério 1.1.1). Responda somente com um objeto JSON válido, sem texto adicional.";

/// A fully shaped HTTP POST: target URL, extra headers and JSON body.
///
/// `Content-Type: application/json` is implied and added by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl ProviderRequest {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// URL with the query string removed, safe to log.
    pub fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_case_insensitive() {
        let request = ProviderRequest::new("https://x.test", Value::Null)
            .with_header("x-api-key", "k");
        assert_eq!(request.header("X-API-KEY"), Some("k"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_redacted_url_drops_query() {
        let request = ProviderRequest::new("https://g.test/models/m:generateContent?key=secret", Value::Null);
        assert_eq!(request.redacted_url(), "https://g.test/models/m:generateContent");
    }
}
