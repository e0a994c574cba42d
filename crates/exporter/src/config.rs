//! Exporter configuration from environment variables

use std::env;

const DEFAULT_BASE_URL: &str = "https://nxt.chessbomb.com";

// The upstream rejects non-browser clients, so the default UA is a real one.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the events broadcast API
    pub base_url: String,

    /// User agent sent with every upstream request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BROADCAST_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_agent: env::var("BROADCAST_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
