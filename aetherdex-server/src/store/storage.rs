//! Durable key-value storage port.
//!
//! The cache never touches `window.localStorage` directly; it talks to a
//! [`KeyValueStorage`]. [`detect`] picks the browser adapter when the module
//! runs on a page with a window, and [`NoStorage`] everywhere else (Web
//! Worker, native tests, non-interactive renders).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed for key \"{key}\": {reason}")]
    Read { key: String, reason: String },
    #[error("storage write failed for key \"{key}\": {reason}")]
    Write { key: String, reason: String },
}

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// `false` means reads should return defaults and writes are no-ops.
    fn is_available(&self) -> bool {
        true
    }
}

/// Storage for contexts that have none. Reports itself unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl KeyValueStorage for NoStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// In-memory storage with an optional quota on the total stored bytes
/// (keys plus values), mirroring the browser's `QuotaExceededError`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Raw stored text for a key, bypassing the port.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store raw text without quota checks (seeding corrupt data in tests).
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: format!("quota exceeded ({needed} > {quota} bytes)"),
                });
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStorage, StorageError};

    /// `window.localStorage` adapter.
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        /// `None` when there is no window (Web Worker) or storage is
        /// disabled by the browser.
        pub fn from_window() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|e| StorageError::Read {
                    key: key.to_string(),
                    reason: format!("{e:?}"),
                })
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{e:?}"),
                })
        }
    }
}

/// Pick the storage for the current environment.
pub fn detect() -> Rc<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = BrowserStorage::from_window() {
            return Rc::new(storage);
        }
        log::info!("localStorage unavailable, preferences will not persist");
    }
    Rc::new(NoStorage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "small").unwrap();
        let err = storage.set_item("k", "much too large").unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(storage.raw("k").as_deref(), Some("small"));
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let storage = MemoryStorage::with_quota(6);
        storage.set_item("k", "12345").unwrap();
        storage.set_item("k", "54321").unwrap();
        assert_eq!(storage.raw("k").as_deref(), Some("54321"));
    }

    #[test]
    fn no_storage_is_unavailable() {
        let storage = NoStorage;
        assert!(!storage.is_available());
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn detect_falls_back_to_no_storage_natively() {
        assert!(!detect().is_available());
    }
}
