//! Process-wide HTTP client configuration.

use std::time::Duration;

use reqwest::Client;

use crate::error::ConnectorResult;

/// Client parameters, fixed once at process start. The built client is
/// shared by every invocation; it holds no mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub connect_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { connect_timeout_ms: 30_000 }
    }
}

impl ClientConfig {
    /// Build the shared `reqwest::Client`. HTTP/2 is preferred through TLS
    /// ALPN negotiation; everything else stays on transport defaults: no
    /// per-request timeout, no retries, no redirect-policy overrides.
    pub fn build_client(&self) -> ConnectorResult<Client> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_thirty_second_connect_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout_ms, 30_000);
    }

    #[test]
    fn default_config_builds_a_client() {
        assert!(ClientConfig::default().build_client().is_ok());
    }
}
