//! Client configuration

/// Base URL used when the operator leaves the prompt blank
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Administrative API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without a trailing path segment for the endpoint
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the configuration from what the operator typed at the prompt
    pub fn from_input(input: &str) -> Self {
        let base_url = input.trim();
        if base_url.is_empty() {
            return Self::default();
        }

        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Full URL of an endpoint under the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
