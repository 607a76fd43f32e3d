use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_ANALYTICS_URL: &str = "http://127.0.0.1:8080/api/analytics/api/v1";
const DEFAULT_SHORTENER_URL: &str = "http://127.0.0.1:8080/api/shortener/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analytics service
    pub analytics_url: String,

    /// Base URL of the shortener service
    pub shortener_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    const fn default_timeout_secs() -> u64 {
        10
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let analytics_url = std::env::var("LINKSCOPE_ANALYTICS_URL")
            .unwrap_or_else(|_| DEFAULT_ANALYTICS_URL.to_string());

        let shortener_url = std::env::var("LINKSCOPE_SHORTENER_URL")
            .unwrap_or_else(|_| DEFAULT_SHORTENER_URL.to_string());

        let timeout_secs = match std::env::var("LINKSCOPE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("LINKSCOPE_TIMEOUT_SECS must be a positive integer")?,
            Err(_) => Self::default_timeout_secs(),
        };

        Ok(Config {
            analytics_url,
            shortener_url,
            timeout_secs,
        })
    }
}
