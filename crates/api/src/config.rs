//! Server configuration, resolved once at startup.

/// Explicit configuration value constructed in `main` and passed to the
/// listen call; there is no process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
}

impl ApiConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";

    /// Read configuration from the environment (`BIND_ADDR`).
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string());
        Self { bind_addr }
    }
}
