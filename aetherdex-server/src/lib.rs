//! Aetherdex in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the JavaScript
//! bridge to call. Uses `matchit` for URL routing. Collection and theme
//! preferences persist to `localStorage` through [`store`]; the team lives
//! only in the session.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod collection;
pub mod config;
pub mod filters;
pub mod routes;
pub mod session;
pub mod store;
pub mod team;
pub mod theme;

/// Install the console logger and panic hook when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::DEFAULT_LOG_LEVEL).is_err() {
        log::set_max_level(config::DEFAULT_LOG_LEVEL.to_level_filter());
    }
    log::info!("aetherdex-server {} ready", env!("CARGO_PKG_VERSION"));
}

/// Change the maximum log level (`"off"`, `"error"`, … `"trace"`).
/// Returns `false` for an unrecognized level.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => {
            log::warn!("unknown log level \"{level}\"");
            false
        }
    }
}

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method (e.g., "GET", "POST")
/// * `path`  : URL path (e.g., "/api/collection")
/// * `query` : Query string (e.g., "?show=collected&element=Fire")
/// * `body`  : Request body (form data or uploaded file text). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // matchit compiles route patterns into a radix tree; the value is a tag
    // matched on below.
    let mut router = matchit::Router::new();

    router.insert("/api/monsters", "monsters").ok();
    router.insert("/api/filters", "filters").ok();
    router.insert("/api/team", "team").ok();

    router.insert("/api/collection", "collection").ok();
    router.insert("/api/collection/stats", "collection_stats").ok();
    router.insert("/api/collection/toggle", "collection_toggle").ok();
    router.insert("/api/collection/export", "collection_export").ok();
    router.insert("/api/collection/import", "collection_import").ok();

    router.insert("/api/theme", "theme").ok();

    log::debug!("{method} {path}{query}");

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("monsters", "GET") => routes::monsters::handle(query),
            ("filters", "GET") => routes::filters::handle(query),
            ("team", "GET") => routes::team::handle_get(query),
            ("team", "POST") => routes::team::handle_post(body),

            ("collection", "GET") => routes::collection::handle_get(query),
            ("collection_stats", "GET") => routes::collection::handle_stats_get(query),
            ("collection_toggle", "POST") => routes::collection::handle_toggle_post(body),
            ("collection_export", "GET") => routes::collection::handle_export_get(query),
            ("collection_import", "POST") => routes::collection::handle_import_post(body),

            ("theme", "GET") => routes::theme::handle_get(query),
            ("theme", "POST") => routes::theme::handle_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-red-600">404: route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-600">405: method not allowed</span>"#.to_string()
}
