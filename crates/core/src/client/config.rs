use std::time::Duration;

/// Environment variables consulted for the backend base URL, in priority
/// order. The first one set to a non-empty value wins; if none is set the
/// client runs in mock mode for the whole process lifetime.
pub const BASE_URL_ENV_VARS: [&str; 3] = [
    "FRUIT_SHOP_API_BASE",
    "FRUIT_SHOP_BACKEND_URL",
    "FRUIT_SHOP_FRONTEND_URL",
];

/// Default bound on each outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Commerce Data Client configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, trailing slashes stripped. `None` = mock mode.
    pub base_url: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolve the base URL from the ordered environment variable list.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = BASE_URL_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|v| normalize_base_url(&v));
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Permanent mock mode, regardless of the environment.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Explicit base URL (mainly for tests and embedding shells).
    #[must_use]
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trim whitespace and trailing slashes; an empty result counts as unset.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
