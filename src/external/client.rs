use std::sync::LazyLock;
use std::time::Duration;

use crate::config::settings::HttpSettings;
use crate::error::OrbiterResult;

/// User-Agent sent with every provider request
pub const USER_AGENT: &str = concat!("orbiter/", env!("CARGO_PKG_VERSION"));

/// Global HTTP client instance shared by every default transport
///
/// Initialized lazily on first access so that clients created without
/// explicit HTTP settings share one connection pool.
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Connection pooling**: idle connections kept for 90s
/// - **Compression**: gzip, deflate, brotli and zstd responses
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_client(&HttpSettings::default()).expect("Failed to build HTTP client")
});

/// Builds a reqwest client from HTTP settings
pub fn build_client(settings: &HttpSettings) -> OrbiterResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout))
        .connect_timeout(Duration::from_secs(settings.connect_timeout))
        // Connection pooling
        .pool_max_idle_per_host(settings.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(settings.user_agent.as_str())
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }

    #[test]
    fn test_build_client_with_custom_settings() {
        let settings = HttpSettings {
            timeout: 5,
            connect_timeout: 2,
            pool_max_idle_per_host: 1,
            user_agent: "custom-agent/1.0".to_string(),
        };

        assert!(build_client(&settings).is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("orbiter/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
