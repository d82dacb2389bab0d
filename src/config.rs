pub const DEFAULT_API_URL: &str = "https://tokenofthanks-production.up.railway.app";
pub const API_URL_ENV: &str = "THANKS_API_URL";

pub const HISTORY_PAGE_SIZE: u32 = 10;
pub const RECENT_ACTIVITY_LIMIT: u32 = 5;
pub const SEARCH_MIN_CHARS: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const LOW_STOCK_THRESHOLD: u32 = 5;
pub const TOAST_LIFETIME_MS: u32 = 4000;
pub const SEND_REDIRECT_DELAY_MS: u32 = 1500;
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time configuration for the browser bundle, where there is no
    /// process environment to read.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("THANKS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// `explicit` wins, then the runtime environment, then the default.
    pub fn resolve(explicit: Option<String>) -> Self {
        let api_url = explicit
            .filter(|url| !url.trim().is_empty())
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
