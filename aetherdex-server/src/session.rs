//! Per-tab session state.
//!
//! Uses `thread_local!` + `RefCell` for mutable access in single-threaded
//! WASM. The module stays loaded for the life of the page, so the session
//! persists across `handle_request` calls; the collection and theme are also
//! mirrored to storage, the team is not.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::collection::CollectionTracker;
use crate::store::KeyValueStorage;
use crate::store::storage;
use crate::team::Team;
use crate::theme::ThemeStore;

pub struct Session {
    pub collection: CollectionTracker,
    pub theme: ThemeStore,
    pub team: Team,
}

impl Session {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            collection: CollectionTracker::load(storage.clone()),
            theme: ThemeStore::load(storage),
            team: Team::new(),
        }
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new(storage::detect()));
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&Session) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Session) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Rebuild the session over `storage`, reloading every persisted value.
pub fn install_storage(storage: Rc<dyn KeyValueStorage>) {
    debug!("installing storage (available: {})", storage.is_available());
    SESSION.with(|s| {
        *s.borrow_mut() = Session::new(storage);
    });
}
