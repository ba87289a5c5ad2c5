use thiserror::Error;

/// Unified error type for the entire fruit-shop-core library.
///
/// Note that the public surface of the Data Client and the Cart Ledger
/// deliberately never returns these: remote failures degrade to mock data and
/// storage failures degrade to in-memory state. `CoreError` exists for the
/// fallible internals (`try_*` calls, store implementations) and for tests
/// that want to assert on the failure that triggered a fallback.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    Network(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // misconfigured base URL carrying credentials never leaks into logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
