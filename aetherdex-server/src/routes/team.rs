//! `/api/team` routes: the three team slots and the composition panel.

use log::debug;

use crate::routes::render::{element_badge, monster_badges, monster_image, type_badge};
use crate::routes::util::{error_fragment, escape_html, get_param, parse_form_body};
use crate::session::{with_session, with_session_mut};
use crate::team::{Selection, TEAM_SIZE, Team};

fn render_slots(team: &Team) -> String {
    let mut html = String::new();
    for (index, slot) in team.slots().iter().enumerate() {
        match slot {
            Some(monster) => html.push_str(&format!(
                r##"<div class="team-slot relative rounded-lg border p-2.5 pr-9">
  <button type="button" class="absolute right-1.5 top-1.5 h-6 w-6" hx-post="/api/team" hx-vals='{{"action":"remove","slot":"{index}"}}' hx-target="#team-panel" hx-swap="innerHTML" aria-label="Remove {name}">&times;</button>
  <div class="flex gap-2 items-start">{img}<div class="flex-1 min-w-0 space-y-1"><h3 class="font-semibold text-sm leading-tight">{name}</h3>{badges}</div></div>
</div>"##,
                img = monster_image(monster, "h-10 w-10 object-contain"),
                name = escape_html(monster.name),
                badges = monster_badges(monster),
            )),
            None => html.push_str(&format!(
                r#"<div class="team-slot flex h-16 items-center justify-center rounded-lg border border-dashed"><p class="text-muted-foreground text-xs">Empty Slot {}</p></div>"#,
                index + 1
            )),
        }
    }
    html
}

fn render_counts(badges: Vec<(String, usize)>) -> String {
    if badges.is_empty() {
        return r#"<span class="text-xs text-muted-foreground">None</span>"#.to_string();
    }
    let items: String = badges
        .into_iter()
        .map(|(badge, count)| {
            format!(
                r#"<div class="flex items-center gap-0.5">{badge}<span class="text-xs font-medium">&times;{count}</span></div>"#
            )
        })
        .collect();
    format!(r#"<div class="flex flex-wrap gap-1">{items}</div>"#)
}

fn render_composition(team: &Team) -> String {
    if team.is_empty() {
        return r#"<div class="team-composition rounded-lg border p-3"><h3 class="text-xs font-semibold mb-1.5">Team Composition</h3><p class="text-muted-foreground text-xs">Select monsters to see composition</p></div>"#.to_string();
    }
    let composition = team.composition();
    let elements = composition
        .elements
        .iter()
        .map(|&(e, n)| (element_badge(e), n))
        .collect();
    let types = composition
        .types
        .iter()
        .map(|&(t, n)| (type_badge(t), n))
        .collect();
    format!(
        r#"<div class="team-composition rounded-lg border p-3 space-y-2">
  <h3 class="text-xs font-semibold">Team Composition</h3>
  <div class="space-y-1.5"><span class="text-xs font-medium text-muted-foreground">Elements</span>{}</div>
  <div class="space-y-1.5"><span class="text-xs font-medium text-muted-foreground">Types</span>{}</div>
</div>"#,
        render_counts(elements),
        render_counts(types),
    )
}

/// Header, slots and composition.
pub fn render_panel(team: &Team) -> String {
    let clear = if team.is_empty() {
        String::new()
    } else {
        r##"<button type="button" class="rounded-md border px-2 py-1 text-sm" hx-post="/api/team" hx-vals='{"action":"clear"}' hx-target="#team-panel" hx-swap="innerHTML">Clear</button>"##.to_string()
    };
    format!(
        r#"<div class="flex items-center justify-between"><h2 class="text-lg font-bold">Your Team ({count}/{TEAM_SIZE})</h2>{clear}</div>
<div class="space-y-2">{slots}</div>
{composition}"#,
        count = team.len(),
        slots = render_slots(team),
        composition = render_composition(team),
    )
}

/// Reload the monster grid so its selected markers follow the team.
fn grid_refresh() -> &'static str {
    r##"<div hx-get="/api/monsters" hx-include="#filter-bar" hx-trigger="load" hx-target="#monsters-grid" hx-swap="innerHTML"></div>"##
}

/// Handle GET /api/team
pub fn handle_get(_query: &str) -> String {
    with_session(|s| render_panel(&s.team))
}

/// Handle POST /api/team
/// Body params:
///   - action=select&id={id}   → add to the first empty slot, or remove if on the team
///   - action=remove&slot={n}  → empty slot n (0-based)
///   - action=clear            → empty every slot
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let action = get_param(&params, "action").unwrap_or("");

    let notice = match action {
        "select" => {
            let Some(id) = get_param(&params, "id").filter(|id| !id.is_empty()) else {
                return error_fragment("Missing id parameter");
            };
            match with_session_mut(|s| s.team.select(id)) {
                Selection::Added(slot) | Selection::Removed(slot) => {
                    debug!("team selection {id} at slot {slot}");
                    String::new()
                }
                Selection::Full => format!(
                    r#"<p class="text-xs text-muted-foreground">Team is full ({TEAM_SIZE}/{TEAM_SIZE})</p>"#
                ),
                Selection::Unknown => return error_fragment(&format!("Unknown monster: {id}")),
            }
        }
        "remove" => {
            let Some(slot) = get_param(&params, "slot").and_then(|v| v.parse::<usize>().ok()) else {
                return error_fragment("Missing or invalid slot parameter");
            };
            with_session_mut(|s| s.team.remove(slot));
            String::new()
        }
        "clear" => {
            with_session_mut(|s| s.team.clear());
            String::new()
        }
        _ => return error_fragment("Unknown team action"),
    };

    let panel = with_session(|s| render_panel(&s.team));
    format!("{panel}{notice}{}", grid_refresh())
}
