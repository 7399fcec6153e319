use anyhow::{ensure, Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
///
/// A missing `OPENAI_API_KEY` does not abort startup: the service comes up
/// without an upstream client and every idea request is answered with a
/// configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub upstream_timeout_secs: u64,
    pub port: u16,
    pub app_env: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            upstream_timeout_secs: parse_timeout_secs(optional_env("UPSTREAM_TIMEOUT_SECS"))?,
            port: parse_port(optional_env("PORT"))?,
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "not_set".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Length of the configured credential, for diagnostics. Never exposes the value.
    pub fn api_key_len(&self) -> usize {
        self.openai_api_key.as_deref().map_or(0, str::len)
    }
}

/// Reads a variable, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.as_deref()
        .unwrap_or("5000")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

fn parse_timeout_secs(raw: Option<String>) -> Result<u64> {
    let secs = raw
        .as_deref()
        .unwrap_or("60")
        .parse::<u64>()
        .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
    ensure!(secs > 0, "UPSTREAM_TIMEOUT_SECS must be greater than zero");
    Ok(secs)
}

#[cfg(test)]
impl Config {
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            openai_api_key: api_key.map(str::to_string),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            upstream_timeout_secs: 5,
            port: 0,
            app_env: "test".to_string(),
            rust_log: "debug".to_string(),
        }
    }
}
