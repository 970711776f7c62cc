//! Validated local cache: a typed view over one storage key.
//!
//! Reads never fail: an absent, unreadable, malformed or schema-invalid
//! entry degrades to the caller's default, with an error or warning logged.
//! Writes are best effort: the in-memory value always takes the update,
//! and a failed persist is logged and leaves the stored entry untouched.
//!
//! Each [`LocalCache`] owns its own in-memory copy. Two caches over the same
//! key only meet through storage; neither sees the other's updates until it
//! reads again, and the last write wins.

use std::rc::Rc;

use log::{debug, error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::schema::{Schema, ValidationError};
use super::storage::{KeyValueStorage, StorageError};

/// Why a read fell back to the default.
#[derive(Debug, Error)]
pub enum CacheMiss {
    #[error("storage unavailable")]
    Unavailable,
    #[error("no stored entry")]
    Absent,
    #[error(transparent)]
    Unreadable(#[from] StorageError),
    #[error("stored value is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("stored value has the wrong shape: {0}")]
    Mismatched(#[source] serde_json::Error),
    #[error("stored value failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

/// Read and decode `key`, reporting why nothing usable was found.
pub fn read_entry<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
    schema: Option<&dyn Schema<T>>,
) -> Result<T, CacheMiss> {
    if !storage.is_available() {
        return Err(CacheMiss::Unavailable);
    }
    let raw = match storage.get_item(key)? {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(CacheMiss::Absent),
    };
    let parsed: serde_json::Value = serde_json::from_str(&raw).map_err(CacheMiss::Malformed)?;
    match schema {
        Some(schema) => Ok(schema.parse(&parsed)?),
        None => serde_json::from_value(parsed).map_err(CacheMiss::Mismatched),
    }
}

/// Read `key`, falling back to `default` on any miss.
pub fn read<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
    default: T,
    schema: Option<&dyn Schema<T>>,
) -> T {
    match read_entry(storage, key, schema) {
        Ok(value) => value,
        Err(CacheMiss::Unavailable | CacheMiss::Absent) => default,
        Err(miss @ CacheMiss::Invalid(_)) => {
            warn!("localStorage key \"{key}\" failed validation, using default value: {miss}");
            default
        }
        Err(miss) => {
            error!("Error loading localStorage key \"{key}\": {miss}");
            default
        }
    }
}

/// Serialize and store `value`. Failures are logged, never returned.
pub fn write<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) {
    if !storage.is_available() {
        return;
    }
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            error!("Error serializing localStorage key \"{key}\": {e}");
            return;
        }
    };
    match storage.set_item(key, &json) {
        Ok(()) => debug!("persisted localStorage key \"{key}\" ({} bytes)", json.len()),
        Err(e) => error!("Error saving localStorage key \"{key}\": {e}"),
    }
}

/// An in-memory value mirrored to one storage key.
pub struct LocalCache<T> {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
    value: T,
}

impl<T: Serialize + DeserializeOwned> LocalCache<T> {
    /// Load without shape checks beyond what `T`'s deserializer enforces.
    pub fn load(storage: Rc<dyn KeyValueStorage>, key: &str, default: T) -> Self {
        let value = read(storage.as_ref(), key, default, None);
        Self::with_value(storage, key, value)
    }

    /// Load through `schema`; values it rejects fall back to `default`.
    pub fn load_validated(
        storage: Rc<dyn KeyValueStorage>,
        key: &str,
        default: T,
        schema: &dyn Schema<T>,
    ) -> Self {
        let value = read(storage.as_ref(), key, default, Some(schema));
        Self::with_value(storage, key, value)
    }

    fn with_value(storage: Rc<dyn KeyValueStorage>, key: &str, value: T) -> Self {
        let cache = Self {
            storage,
            key: key.to_string(),
            value,
        };
        cache.persist();
        cache
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and persist it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Mutate the value in place and persist it.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.persist();
        result
    }

    fn persist(&self) {
        write(self.storage.as_ref(), &self.key, &self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::{literal, string};
    use crate::store::storage::{MemoryStorage, NoStorage};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use serde::Deserialize;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Records each thread's log output so parallel tests stay apart.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
    static INSTALL: Once = Once::new();

    /// Run `f` and return the warn/error records it logged.
    fn logged<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
        INSTALL.call_once(|| {
            if log::set_logger(&CAPTURE_LOGGER).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
        let result = f();
        let records = CAPTURED.with(|c| {
            c.borrow_mut()
                .drain(..)
                .filter(|(level, _)| *level <= Level::Warn)
                .collect()
        });
        (result, records)
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        name: String,
        count: u32,
        tags: Vec<String>,
    }

    fn mode_schema(value: &Value) -> Result<String, ValidationError> {
        literal(value, &[("a", "a"), ("b", "b")]).map(str::to_string)
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".into(),
            })
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "SecurityError".into(),
            })
        }
    }

    #[test]
    fn absent_key_returns_default() {
        let storage = MemoryStorage::new();
        assert_eq!(read(&storage, "missing", 42_u32, None), 42);
        assert_eq!(read(&storage, "missing", Vec::<String>::new(), None), Vec::<String>::new());
    }

    #[test]
    fn empty_entry_returns_default() {
        let storage = MemoryStorage::new();
        storage.insert_raw("k", "");
        assert_eq!(read(&storage, "k", "fallback".to_string(), None), "fallback");
    }

    #[test]
    fn written_value_reads_back() {
        let storage = MemoryStorage::new();
        let prefs = Prefs {
            name: "x".into(),
            count: 3,
            tags: vec!["a".into(), "b".into()],
        };
        write(&storage, "prefs", &prefs);
        let loaded = read(
            &storage,
            "prefs",
            Prefs { name: String::new(), count: 0, tags: vec![] },
            None,
        );
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn validated_value_reads_back() {
        let storage = MemoryStorage::new();
        write(&storage, "mode", &"b");
        let schema: &dyn Schema<String> = &mode_schema;
        let loaded = read(&storage, "mode", "a".to_string(), Some(schema));
        assert_eq!(loaded, "b");
    }

    #[test]
    fn scalar_edge_values_round_trip() {
        let storage = MemoryStorage::new();
        write(&storage, "flag", &false);
        assert!(!read(&storage, "flag", true, None));
        write(&storage, "text", &"");
        assert_eq!(read(&storage, "text", "x".to_string(), None), "");
        write(&storage, "maybe", &Option::<u32>::None);
        assert_eq!(read(&storage, "maybe", Some(5_u32), None), None);
    }

    #[test]
    fn malformed_json_falls_back_with_or_without_schema() {
        let storage = MemoryStorage::new();
        storage.insert_raw("mode", "{not json");
        assert!(matches!(
            read_entry::<String>(&storage, "mode", None),
            Err(CacheMiss::Malformed(_))
        ));
        assert_eq!(read(&storage, "mode", "a".to_string(), None), "a");
        let schema: &dyn Schema<String> = &mode_schema;
        assert_eq!(read(&storage, "mode", "a".to_string(), Some(schema)), "a");
    }

    #[test]
    fn malformed_json_logs_an_error() {
        let storage = MemoryStorage::new();
        storage.insert_raw("mode", "{not json");
        let (value, records) = logged(|| read(&storage, "mode", "a".to_string(), None));
        assert_eq!(value, "a");
        assert_eq!(records.len(), 1, "{records:?}");
        let (level, message) = &records[0];
        assert_eq!(*level, Level::Error);
        assert!(message.contains("\"mode\""), "{message}");
        assert!(message.contains("not valid JSON"), "{message}");
    }

    #[test]
    fn schema_failure_logs_a_warning_with_issues() {
        let storage = MemoryStorage::new();
        storage.insert_raw("mode", "\"purple\"");
        let schema: &dyn Schema<String> = &mode_schema;
        let (value, records) = logged(|| read(&storage, "mode", "a".to_string(), Some(schema)));
        assert_eq!(value, "a");
        assert_eq!(records.len(), 1, "{records:?}");
        let (level, message) = &records[0];
        assert_eq!(*level, Level::Warn);
        assert!(message.contains("\"mode\""), "{message}");
        assert!(message.contains("received 'purple'"), "{message}");
    }

    #[test]
    fn schema_failure_falls_back_and_reports_issues() {
        let storage = MemoryStorage::new();
        storage.insert_raw("mode", "\"purple\"");
        let schema: &dyn Schema<String> = &mode_schema;
        let miss = read_entry(&storage, "mode", Some(schema)).unwrap_err();
        let CacheMiss::Invalid(ref err) = miss else {
            panic!("expected validation miss, got {miss:?}");
        };
        assert_eq!(err.issues().len(), 1);
        assert!(miss.to_string().contains("received 'purple'"));
        assert_eq!(read(&storage, "mode", "a".to_string(), Some(schema)), "a");
    }

    #[test]
    fn wrong_shape_without_schema_falls_back() {
        let storage = MemoryStorage::new();
        storage.insert_raw("ids", "{\"not\":\"a list\"}");
        assert!(matches!(
            read_entry::<Vec<String>>(&storage, "ids", None),
            Err(CacheMiss::Mismatched(_))
        ));
        assert_eq!(read(&storage, "ids", vec!["d".to_string()], None), vec!["d".to_string()]);
    }

    #[test]
    fn read_errors_fall_back() {
        assert_eq!(read(&BrokenStorage, "k", 1_u8, None), 1);
    }

    #[test]
    fn unavailable_storage_returns_default_without_reading() {
        assert!(matches!(
            read_entry::<u8>(&NoStorage, "k", None),
            Err(CacheMiss::Unavailable)
        ));
        let mut cache = LocalCache::load(Rc::new(NoStorage), "k", 9_u8);
        cache.set(10);
        assert_eq!(*cache.get(), 10);
    }

    #[test]
    fn failed_write_keeps_memory_and_old_storage() {
        let storage = Rc::new(MemoryStorage::with_quota(40));
        let mut cache = LocalCache::load(storage.clone(), "k", "short".to_string());
        assert_eq!(storage.raw("k").as_deref(), Some("\"short\""));

        cache.set("x".repeat(100));
        assert_eq!(cache.get().len(), 100);
        assert_eq!(storage.raw("k").as_deref(), Some("\"short\""));
    }

    #[test]
    fn failed_write_does_not_panic() {
        let mut cache = LocalCache::load(Rc::new(BrokenStorage), "k", 1_u8);
        cache.update(|v| *v += 1);
        assert_eq!(*cache.get(), 2);
    }

    #[test]
    fn load_persists_the_initial_value() {
        let storage = Rc::new(MemoryStorage::new());
        let cache = LocalCache::load(storage.clone(), "ids", vec!["a".to_string()]);
        assert_eq!(cache.key(), "ids");
        assert_eq!(storage.raw("ids").as_deref(), Some("[\"a\"]"));
    }

    #[test]
    fn invalid_entry_is_overwritten_with_default() {
        let storage = Rc::new(MemoryStorage::new());
        storage.insert_raw("mode", "\"purple\"");
        let schema: &dyn Schema<String> = &mode_schema;
        let cache = LocalCache::load_validated(storage.clone(), "mode", "a".to_string(), schema);
        assert_eq!(cache.get(), "a");
        assert_eq!(storage.raw("mode").as_deref(), Some("\"a\""));
    }

    #[test]
    fn instances_do_not_see_each_other_until_reload() {
        let storage = Rc::new(MemoryStorage::new());
        let mut first = LocalCache::load(storage.clone(), "n", 0_u32);
        let second = LocalCache::load(storage.clone(), "n", 0_u32);

        first.set(5);
        assert_eq!(*second.get(), 0);

        let third = LocalCache::load(storage.clone(), "n", 0_u32);
        assert_eq!(*third.get(), 5);
    }

    #[test]
    fn last_writer_wins() {
        let storage = Rc::new(MemoryStorage::new());
        let mut first = LocalCache::load(storage.clone(), "n", 0_u32);
        let mut second = LocalCache::load(storage.clone(), "n", 0_u32);
        first.set(1);
        second.set(2);
        assert_eq!(storage.raw("n").as_deref(), Some("2"));
    }

    #[test]
    fn string_schema_coerces_to_owned() {
        let storage = MemoryStorage::new();
        write(&storage, "s", &"hello");
        let upper = |v: &Value| string(v).map(str::to_uppercase);
        let schema: &dyn Schema<String> = &upper;
        assert_eq!(read(&storage, "s", String::new(), Some(schema)), "HELLO");
    }
}
