//! `/api/monsters` route: paginated, filtered monster grid for the team
//! builder, loaded by HTMX infinite scroll.
//!
//! Query parameters:
//! - `page`: 0-indexed page number (default: 0)
//! - `per` : monsters per page (default: 24, max 100)
//! - `search`, `element`, `type`: see [`MonsterFilter`]

use crate::catalog::{Monster, sorted_by_name};
use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::filters::MonsterFilter;
use crate::routes::render::{monster_badges, monster_count, monster_image};
use crate::routes::util::{encode_query, escape_html, get_param, parse_query};
use crate::session::with_session;
use crate::team::{TEAM_SIZE, Team};

/// One selectable monster. Selected monsters get a ring; when the team is
/// full the rest are dimmed.
fn render_monster(monster: &Monster, team: &Team, delay_ms: usize) -> String {
    let selected = team.contains(monster.id);
    let state = if selected {
        "ring-2 ring-primary bg-primary/10"
    } else if team.len() == TEAM_SIZE {
        "opacity-50"
    } else {
        "hover:bg-accent/50"
    };
    format!(
        r##"<button type="button" class="monster-card relative p-3 rounded-lg border bg-card text-center animate-card-fade-in {state}" style="animation-delay:{delay_ms}ms"
  hx-post="/api/team" hx-vals='{{"action":"select","id":"{id}"}}' hx-target="#team-panel" hx-swap="innerHTML"
  aria-pressed="{selected}">
  <div class="flex justify-center mb-2">{img}</div>
  <h3 class="font-semibold text-sm mb-1">{name}</h3>
  {badges}
</button>"##,
        id = monster.id,
        img = monster_image(monster, "h-16 w-16 object-contain"),
        name = escape_html(monster.name),
        badges = monster_badges(monster),
    )
}

/// Render the sentinel div that triggers the next page load.
fn render_sentinel(page: usize, per: usize, filter: &MonsterFilter) -> String {
    let mut pairs = vec![("page", page.to_string()), ("per", per.to_string())];
    pairs.extend(filter.query_pairs());
    format!(
        r#"<div hx-get="/api/monsters?{query}"
     hx-trigger="intersect once threshold:0.3"
     hx-swap="outerHTML"
     class="h-24"
     data-scroll-load="true"></div>"#,
        query = encode_query(&pairs),
    )
}

/// Handle GET /api/monsters
pub fn handle(query: &str) -> String {
    let params = parse_query(query);
    let page: usize = get_param(&params, "page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let per = match get_param(&params, "per").and_then(|v| v.parse::<usize>().ok()) {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(n) => n.min(MAX_PAGE_SIZE),
    };
    let filter = MonsterFilter::from_params(&params);

    let filtered = filter.apply(sorted_by_name());
    let total = filtered.len();

    if total == 0 && page == 0 {
        return format!(
            r#"<p id="monster-count" class="text-xs text-muted-foreground">{count} available</p>
<div class="col-span-full py-12 text-center text-muted-foreground">No monsters found</div>"#,
            count = monster_count(0),
        );
    }

    let start = page.saturating_mul(per);
    if start >= total {
        return String::new();
    }
    let end = (start + per).min(total);

    let mut html = String::with_capacity((end - start) * 768);
    if page == 0 {
        html.push_str(&format!(
            r#"<p id="monster-count" class="col-span-full text-xs text-muted-foreground">{} available</p>"#,
            monster_count(total)
        ));
    }

    with_session(|session| {
        for (i, monster) in filtered[start..end].iter().enumerate() {
            // Cap the stagger for scroll-loaded pages.
            let delay_ms = if page == 0 { i * 30 } else { (i * 30).min(180) };
            html.push_str(&render_monster(monster, &session.team, delay_ms));
        }
    });

    if end < total {
        html.push_str(&render_sentinel(page + 1, per, &filter));
    }
    html
}
