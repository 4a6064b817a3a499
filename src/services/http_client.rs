use std::time::Duration;
use reqwest::Client;
use crate::errors::{VelocityError, VelocityResult};

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Shared client for all upstream calls; every request is bounded by `timeout_secs`.
    pub fn build(timeout_secs: u64) -> VelocityResult<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("velocityiq/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VelocityError::system_error("building HTTP client", &e.to_string()))
    }
}
