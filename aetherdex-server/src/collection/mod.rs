//! Collection tracking and the interchange file used to move a collection
//! between browsers.

pub mod file;
pub mod tracker;

pub use file::{CollectionFile, ImportError};
pub use tracker::{CollectionStats, CollectionTracker, ShowMode};
