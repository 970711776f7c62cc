//! `/api/collection/*` routes for the Aetherdex collection page: pair grid,
//! progress panel, toggling, and file export/import.

use log::{info, warn};
use time::OffsetDateTime;

use crate::catalog::{Monster, MonsterPair, find_monster, monster_pairs};
use crate::collection::tracker::percentage;
use crate::collection::{CollectionStats, CollectionTracker, ShowMode};
use crate::filters::MonsterFilter;
use crate::routes::render::{monster_badges, monster_count, monster_image};
use crate::routes::util::{
    error_fragment, escape_html, get_param, js_string, parse_form_body, parse_query,
};
use crate::session::{with_session, with_session_mut};

fn progress_bar(pct: u32, color: &str, height: &str) -> String {
    format!(
        r#"<div class="w-full bg-muted rounded-full {height} overflow-hidden"><div class="{color} h-full transition-all duration-500" style="width: {pct}%"></div></div>"#
    )
}

/// Progress panel. `oob` marks it for an out-of-band swap into `#collection-stats`.
fn render_stats(stats: &CollectionStats, oob: bool) -> String {
    let oob_attr = if oob { r#" hx-swap-oob="true""# } else { "" };
    let pct = stats.completion_percentage();
    format!(
        r#"<div id="collection-stats"{oob_attr} class="rounded-lg border p-4 space-y-4">
  <h3 class="text-lg font-semibold">Collection Progress</h3>
  <div class="space-y-2">
    <div class="flex items-center justify-between"><span class="text-sm font-medium">Overall</span><span class="text-2xl font-bold text-primary">{pct}%</span></div>
    {overall_bar}
    <div class="text-center text-sm text-muted-foreground">{collected} / {total} collected</div>
  </div>
  <div class="space-y-3">
    <div class="flex items-center justify-between"><span class="text-sm">Base Monsters</span><span class="text-sm font-semibold">{base_collected} / {base_total}</span></div>
    {base_bar}
  </div>
  <div class="space-y-3">
    <div class="flex items-center justify-between"><span class="text-sm">Shifted Variants</span><span class="text-sm font-semibold">{shifted_collected} / {shifted_total}</span></div>
    {shifted_bar}
  </div>
</div>"#,
        overall_bar = progress_bar(pct, "bg-primary", "h-3"),
        collected = stats.collected,
        total = stats.total,
        base_collected = stats.base_collected,
        base_total = stats.base_total,
        base_bar = progress_bar(
            percentage(stats.base_collected, stats.base_total),
            "bg-blue-500",
            "h-2"
        ),
        shifted_collected = stats.shifted_collected,
        shifted_total = stats.shifted_total,
        shifted_bar = progress_bar(
            percentage(stats.shifted_collected, stats.shifted_total),
            "bg-purple-500",
            "h-2"
        ),
    )
}

fn render_member(monster: &Monster, collected: bool, label: &str, base_id: &str) -> String {
    let (frame, img_class, check) = if collected {
        (
            "bg-primary/10 border-primary/50 shadow-md",
            "h-20 w-20 object-contain",
            r#"<div class="absolute top-2 right-2 bg-primary text-primary-foreground rounded-full px-1.5 text-xs">&#10003;</div>"#,
        )
    } else {
        (
            "bg-card border-border",
            "h-20 w-20 object-contain opacity-40 grayscale",
            "",
        )
    };
    format!(
        r##"<button type="button" class="collection-member relative p-3 rounded-lg border-2 hover:bg-accent/50 {frame}"
  hx-post="/api/collection/toggle" hx-vals='{{"id":"{id}"}}' hx-include="#filter-bar" hx-target="#pair-{base_id}" hx-swap="outerHTML"
  aria-pressed="{collected}">
  {check}
  <div class="flex justify-center mb-2">{img}</div>
  <div class="text-center"><span class="text-xs font-semibold text-muted-foreground uppercase">{label}</span></div>
  <h3 class="font-semibold text-sm text-center mt-2">{name}</h3>
  {badges}
</button>"##,
        id = monster.id,
        img = monster_image(monster, img_class),
        name = escape_html(monster.name),
        badges = monster_badges(monster),
    )
}

fn render_pair(pair: &MonsterPair, tracker: &CollectionTracker) -> String {
    let base = pair.base;
    let shifted = match pair.shifted {
        Some(m) => render_member(m, tracker.is_collected(m.id), "Shifted", base.id),
        None => r#"<div class="flex items-center justify-center p-3 rounded-lg border-2 border-dashed bg-muted/20"><span class="text-xs text-muted-foreground">No Shifted Variant</span></div>"#.to_string(),
    };
    format!(
        r#"<div id="pair-{id}" class="pair-card rounded-lg border p-4"><div class="grid grid-cols-2 gap-3">{base}{shifted}</div></div>"#,
        id = base.id,
        base = render_member(base, tracker.is_collected(base.id), "Base", base.id),
    )
}

/// Reload the collection grid with the current filter bar.
fn grid_refresh() -> &'static str {
    r##"<div hx-get="/api/collection" hx-include="#filter-bar" hx-trigger="load" hx-target="#collection-grid" hx-swap="innerHTML"></div>"##
}

/// Handle GET /api/collection
pub fn handle_get(query: &str) -> String {
    let params = parse_query(query);
    let show = get_param(&params, "show")
        .and_then(ShowMode::parse)
        .unwrap_or_default();
    let filter = MonsterFilter::from_params(&params);

    with_session(|s| {
        let pairs = s.collection.pairs(show, &filter);
        if pairs.is_empty() {
            let hint = if filter.is_active() || show != ShowMode::All {
                "Try adjusting your filters"
            } else {
                "No monster data available"
            };
            return format!(
                r#"<div class="col-span-full flex flex-col items-center py-16 text-center"><p class="text-muted-foreground text-lg">No monsters found</p><p class="text-muted-foreground text-sm mt-2">{hint}</p></div>"#
            );
        }
        let mut html = format!(
            r#"<p class="col-span-full text-xs text-muted-foreground">{} found</p>"#,
            monster_count(pairs.iter().map(|p| p.members().count()).sum())
        );
        for pair in &pairs {
            html.push_str(&render_pair(pair, &s.collection));
        }
        html
    })
}

/// Handle GET /api/collection/stats
pub fn handle_stats_get(_query: &str) -> String {
    with_session(|s| render_stats(&s.collection.stats(), false))
}

/// Handle POST /api/collection/toggle
/// Body: `id={monster id}` plus the filter bar fields. Returns the updated
/// pair card and an out-of-band progress panel; when a show mode is active
/// the grid reloads so the pair can leave it.
pub fn handle_toggle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let Some(id) = get_param(&params, "id").filter(|id| !id.is_empty()) else {
        return error_fragment("Missing id parameter");
    };
    let Some(monster) = find_monster(id) else {
        warn!("toggle requested for unknown monster id \"{id}\"");
        return error_fragment(&format!("Unknown monster: {id}"));
    };
    let Some(pair) = monster_pairs()
        .into_iter()
        .find(|p| p.base.id == monster.base_id())
    else {
        return error_fragment(&format!("Unknown monster: {id}"));
    };

    with_session_mut(|s| s.collection.toggle(monster.id));

    let filtered = get_param(&params, "show")
        .and_then(ShowMode::parse)
        .is_some_and(|mode| mode != ShowMode::All);
    with_session(|s| {
        let mut html = render_pair(&pair, &s.collection);
        html.push_str(&render_stats(&s.collection.stats(), true));
        if filtered {
            html.push_str(grid_refresh());
        }
        html
    })
}

fn render_export(tracker: &CollectionTracker, now: OffsetDateTime) -> String {
    let file = match tracker.export(now) {
        Ok(file) => file,
        Err(e) => return error_fragment(&format!("Export failed: {e}")),
    };
    let json = match file.to_pretty_json() {
        Ok(json) => json,
        Err(e) => return error_fragment(&format!("Export failed: {e}")),
    };
    info!(
        "exporting {} collected monsters as {}",
        file.collected_ids.len(),
        file.file_name()
    );
    format!(
        r#"<script>
(function() {{
  var b = new Blob([{json}], {{type: 'application/json'}});
  var a = document.createElement('a');
  a.href = URL.createObjectURL(b);
  a.download = {name};
  document.body.appendChild(a);
  a.click();
  document.body.removeChild(a);
  URL.revokeObjectURL(a.href);
}})();
</script>"#,
        json = js_string(&json),
        name = js_string(&file.file_name()),
    )
}

/// Handle GET /api/collection/export
/// Returns a <script> tag that downloads the collection file.
pub fn handle_export_get(_query: &str) -> String {
    with_session(|s| render_export(&s.collection, OffsetDateTime::now_utc()))
}

/// Handle POST /api/collection/import
/// Accepts the uploaded file text as the raw body or in a `file=` field.
/// A valid file replaces the whole collection; an invalid one changes nothing.
pub fn handle_import_post(body: &str) -> String {
    let raw = body.trim();
    let params;
    let text = if raw.starts_with('{') {
        raw
    } else {
        params = parse_form_body(body);
        get_param(&params, "file").unwrap_or(raw)
    };

    match with_session_mut(|s| s.collection.import_text(text)) {
        Ok(count) => {
            let stats = with_session(|s| render_stats(&s.collection.stats(), true));
            format!(
                r#"<span class="text-emerald-600">Loaded {}</span>{stats}{}"#,
                monster_count(count),
                grid_refresh()
            )
        }
        Err(e) => {
            warn!("collection import rejected: {e}");
            error_fragment(&format!("Failed to load collection: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COLLECTION_KEY;
    use crate::routes::util::percent_encode;
    use crate::session::install_storage;
    use crate::store::MemoryStorage;
    use std::rc::Rc;
    use time::macros::datetime;

    fn fresh_session() -> Rc<MemoryStorage> {
        let storage = Rc::new(MemoryStorage::new());
        install_storage(storage.clone());
        storage
    }

    #[test]
    fn grid_lists_every_pair() {
        fresh_session();
        let html = handle_get("");
        assert_eq!(html.matches("class=\"pair-card").count(), 28);
        assert!(html.contains("56 monsters found"));
        assert!(html.contains(r#"id="pair-jotunn""#));
    }

    #[test]
    fn grid_applies_show_mode_and_filter() {
        fresh_session();
        with_session_mut(|s| s.collection.toggle("nixe"));
        let html = handle_get("?show=collected");
        assert_eq!(html.matches("class=\"pair-card").count(), 1);
        assert!(html.contains(r#"id="pair-nixe""#));

        let html = handle_get("?element=Wild");
        assert_eq!(html.matches("class=\"pair-card").count(), 1);
        assert!(html.contains(r#"id="pair-grimoire""#));
    }

    #[test]
    fn empty_grid_suggests_adjusting_filters() {
        fresh_session();
        let html = handle_get("?show=collected");
        assert!(html.contains("No monsters found"));
        assert!(html.contains("Try adjusting your filters"));
    }

    #[test]
    fn stats_panel_reports_progress() {
        fresh_session();
        let html = handle_stats_get("");
        assert!(html.contains("0%"));
        assert!(html.contains("0 / 56 collected"));
        assert!(!html.contains("hx-swap-oob"));

        with_session_mut(|s| {
            for m in crate::catalog::monsters().iter().take(28) {
                s.collection.toggle(m.id);
            }
        });
        let html = handle_stats_get("");
        assert!(html.contains(">50%<"));
        assert!(html.contains("28 / 56 collected"));
    }

    #[test]
    fn toggle_updates_pair_and_stats_and_persists() {
        let storage = fresh_session();
        let html = handle_toggle_post("id=jotunn-shifted");
        assert!(html.starts_with(r#"<div id="pair-jotunn""#));
        assert!(html.contains(r#"aria-pressed="true""#));
        assert!(html.contains(r#"hx-swap-oob="true""#));
        assert!(html.contains("1 / 56 collected"));
        assert!(!html.contains(r#"hx-trigger="load""#));
        assert_eq!(storage.raw(COLLECTION_KEY).as_deref(), Some(r#"["jotunn-shifted"]"#));

        handle_toggle_post("id=jotunn-shifted");
        assert_eq!(storage.raw(COLLECTION_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn toggle_with_show_mode_reloads_grid() {
        fresh_session();
        let html = handle_toggle_post("id=ooze&show=collected");
        assert!(html.contains(r#"hx-trigger="load""#));
    }

    #[test]
    fn toggle_rejects_bad_ids() {
        fresh_session();
        assert!(handle_toggle_post("").contains("Missing id"));
        assert!(handle_toggle_post("id=fake-monster-id").contains("Unknown monster"));
    }

    #[test]
    fn export_script_downloads_dated_file() {
        fresh_session();
        with_session_mut(|s| s.collection.toggle("kitsune"));
        let html = with_session(|s| render_export(&s.collection, datetime!(2025-10-17 08:30 UTC)));
        assert!(html.starts_with("<script>"));
        assert!(html.contains(r#"a.download = "aetherdex-collection-2025-10-17.json";"#));
        assert!(html.contains(r#"\"exportDate\": \"2025-10-17T08:30:00.000Z\""#));
        assert!(html.contains(r#"\"kitsune\""#));
        assert!(html.contains("application/json"));
    }

    #[test]
    fn export_route_uses_current_time() {
        fresh_session();
        let html = handle_export_get("");
        assert!(html.contains("aetherdex-collection-"));
        assert!(html.contains("URL.createObjectURL"));
    }

    #[test]
    fn import_raw_body_replaces_collection() {
        let storage = fresh_session();
        with_session_mut(|s| s.collection.toggle("kitsune"));
        let body = r#"{"version":"1.0","exportDate":"2025-10-17T12:00:00.000Z","collectedIds":["jotunn","cherufe"]}"#;
        let html = handle_import_post(body);
        assert!(html.contains("Loaded 2 monsters"));
        assert!(html.contains("2 / 56 collected"));
        assert_eq!(storage.raw(COLLECTION_KEY).as_deref(), Some(r#"["jotunn","cherufe"]"#));
    }

    #[test]
    fn import_raw_body_ignores_form_like_text_in_values() {
        let storage = fresh_session();
        let body = r#"{"version":"1.0","exportDate":"2025-10-17T12:00:00.000Z","collectedIds":["yeti"],"note":"a&file=b"}"#;
        let html = handle_import_post(body);
        assert!(html.contains("Loaded 1 monster"), "{html}");
        assert_eq!(storage.raw(COLLECTION_KEY).as_deref(), Some(r#"["yeti"]"#));
    }

    #[test]
    fn import_form_field() {
        fresh_session();
        let file = r#"{"version":"1.0","exportDate":"2025-10-17T12:00:00Z"}"#;
        let html = handle_import_post(&format!("file={}", percent_encode(file)));
        assert!(html.contains("Loaded 0 monsters"));
    }

    #[test]
    fn invalid_import_shows_formatted_errors_and_keeps_state() {
        let storage = fresh_session();
        with_session_mut(|s| s.collection.toggle("kitsune"));
        let html = handle_import_post(
            r#"{"version":"invalid","exportDate":"2025-10-17","collectedIds":["fake-monster-id"]}"#,
        );
        assert!(html.contains("Failed to load collection"));
        assert!(html.contains("version: Invalid version format (expected X.Y); "));
        assert!(html.contains("collectedIds.0: Invalid monster ID"));
        assert_eq!(storage.raw(COLLECTION_KEY).as_deref(), Some(r#"["kitsune"]"#));

        let html = handle_import_post("not json at all");
        assert!(html.contains("Failed to load collection"));
        assert!(with_session(|s| s.collection.is_collected("kitsune")));
    }
}
