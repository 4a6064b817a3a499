use crate::config::constants::{DEFAULT_GITHUB_API_URL, DEFAULT_HOST, DEFAULT_SERVER_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_github_api_url() -> String {
        DEFAULT_GITHUB_API_URL.to_string()
    }

    /// Treats blank values the same as absent ones.
    pub fn non_empty(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
