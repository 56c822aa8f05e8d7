//! Runtime settings read from the environment.

/// Settings for the mock server binary.
///
/// `PORT` picks the listen port and `MOCK_DELAY_MS` the simulated network
/// latency applied to every response. Missing or malformed values fall back
/// to the defaults; a mock backend should never refuse to start over its
/// configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            delay_ms: 0,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let delay_ms = std::env::var("MOCK_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.delay_ms);
        Self { port, delay_ms }
    }
}
