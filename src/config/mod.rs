//! Configuration module for the FitTrack backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Populate the store with demo data at startup
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("FITTRACK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid FITTRACK_BIND_ADDR format");

        let log_level = env::var("FITTRACK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo = env::var("FITTRACK_SEED_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Self {
            bind_addr,
            log_level,
            seed_demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("FITTRACK_BIND_ADDR");
        env::remove_var("FITTRACK_LOG_LEVEL");
        env::remove_var("FITTRACK_SEED_DEMO");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo);
    }
}
