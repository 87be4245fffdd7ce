use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_FISCAL_YEAR: &str = "2026-27";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Runtime settings read from the environment (and `.env` via dotenvy).
/// Loading never fails: every value has a default, and a missing API key
/// only means the deck runs on fallback data.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub fiscal_year: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            fiscal_year: DEFAULT_FISCAL_YEAR.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_key: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let fetch_timeout = match get("FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Ignoring invalid FETCH_TIMEOUT_SECS={raw:?}");
                    defaults.fetch_timeout
                }
            },
            None => defaults.fetch_timeout,
        };

        Self {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            api_url: get("GEMINI_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            fiscal_year: get("BUDGET_FISCAL_YEAR").unwrap_or(defaults.fiscal_year),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: get("SESSION_KEY"),
            fetch_timeout,
        }
    }
}
