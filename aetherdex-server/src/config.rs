//! Compile-time configuration: storage keys, interchange file constants and
//! paging defaults. Storage itself is injected at runtime through
//! [`crate::session::install_storage`].

/// localStorage key holding the collected set as a bare JSON array of ids.
pub const COLLECTION_KEY: &str = "aetherdex-collection";

/// localStorage key holding the theme preference string.
pub const THEME_KEY: &str = "theme-preference";

/// Version stamped into every exported collection file.
pub const FILE_VERSION: &str = "1.0";

/// Download name prefix; the export date and `.json` are appended.
pub const EXPORT_FILE_PREFIX: &str = "aetherdex-collection";

/// Monsters per page for `/api/monsters` when `per` is missing or zero.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Upper clamp for the `per` query parameter.
pub const MAX_PAGE_SIZE: usize = 100;

/// Console log level installed by the wasm start hook.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
