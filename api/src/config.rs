use std::env;
use std::time::Duration;

use crate::adapters::zipcloud::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// ZipCloud search endpoint
    pub zipcloud_base_url: String,
    /// Deadline for each outbound lookup
    pub lookup_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_port(env::var("PORT").ok()),
            zipcloud_base_url: env::var("ZIPCLOUD_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            lookup_timeout: parse_timeout(env::var("LOOKUP_TIMEOUT_SECS").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn parse_timeout(value: Option<String>) -> Duration {
    value
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}
