//! Persistence layer: the storage port, schema validation, and the
//! validated local cache built from them.

pub mod cache;
pub mod schema;
pub mod storage;

pub use cache::LocalCache;
pub use schema::{Schema, ValidationError};
pub use storage::{KeyValueStorage, MemoryStorage, NoStorage};
