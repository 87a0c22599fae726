use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:7000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api: ApiSettings,
    pub bind_address: String,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let timeout_secs = match lookup("TERMINOLOGY_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("TERMINOLOGY_API_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };
        Ok(Self {
            api: ApiSettings {
                base_url: lookup("TERMINOLOGY_API_URL").unwrap_or(DEFAULT_API_URL.to_string()),
                token: lookup("TERMINOLOGY_API_TOKEN").filter(|t| !t.trim().is_empty()),
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_address: lookup("BIND_ADDRESS").unwrap_or(DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
