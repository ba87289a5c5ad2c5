use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::CoreError;

/// Storage key for the serialized cart line items.
pub const CART_KEY: &str = "ffm_cart";

/// Storage key for the persisted display-theme preference.
pub const THEME_KEY: &str = "ffm_theme";

/// Minimal durable key-value store, the shape of browser localStorage.
///
/// Injected into the session at startup so the frontend shell can supply
/// whatever durability the platform has (localStorage bridge, a file, or an
/// in-memory fake for tests). `set` takes `&self` — implementations use
/// interior mutability — so the ledger and the session can share one store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `None` for missing keys AND for any read failure; the
    /// callers treat both the same way (lenient restore).
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Callers persist best-effort and ignore the error.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-memory store. The default for tests and for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a single JSON object of key → value on disk, rewritten
/// on every `set`. Native only.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Open a store at `path`. The file is created on first `set`; a missing
    /// or unparseable file reads as empty.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string(&entries)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
