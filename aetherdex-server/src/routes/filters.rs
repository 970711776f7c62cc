//! `/api/filters` route: the search box and element/type filter buttons
//! above a monster grid.
//!
//! The bar re-renders itself when a button is pressed and then reloads the
//! grid it controls, so the grid and the highlighted buttons never disagree.
//!
//! Query parameters:
//! - `target`: `monsters` (team builder, default) or `collection`
//! - `search`, `element`, `type`: current [`MonsterFilter`]
//! - `show`: collection show mode (collection target only)

use crate::catalog::{ALL_ELEMENTS, ALL_TYPES};
use crate::collection::ShowMode;
use crate::filters::MonsterFilter;
use crate::routes::util::{encode_query, escape_html, get_param, parse_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Monsters,
    Collection,
}

impl Target {
    fn parse(s: Option<&str>) -> Self {
        match s {
            Some("collection") => Target::Collection,
            _ => Target::Monsters,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Target::Monsters => "monsters",
            Target::Collection => "collection",
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            Target::Monsters => "/api/monsters",
            Target::Collection => "/api/collection",
        }
    }

    fn grid_id(self) -> &'static str {
        match self {
            Target::Monsters => "monsters-grid",
            Target::Collection => "collection-grid",
        }
    }
}

struct BarState {
    target: Target,
    filter: MonsterFilter,
    show: ShowMode,
}

impl BarState {
    /// Query pairs for the grid endpoint.
    fn grid_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filter.query_pairs();
        if self.target == Target::Collection && self.show != ShowMode::All {
            pairs.push(("show", self.show.as_str().to_string()));
        }
        pairs
    }

    /// `/api/filters?…` for a variation of this state.
    fn bar_url(&self, filter: &MonsterFilter, show: ShowMode) -> String {
        let next = BarState {
            target: self.target,
            filter: filter.clone(),
            show,
        };
        let mut pairs = vec![("target", self.target.name().to_string())];
        pairs.extend(next.grid_pairs());
        format!("/api/filters?{}", encode_query(&pairs))
    }
}

fn filter_button(label: &str, classes: &str, active: bool, url: &str) -> String {
    let ring = if active {
        "ring-2 ring-offset-1 ring-primary"
    } else {
        "opacity-80"
    };
    format!(
        r##"<button type="button" class="filter-btn inline-flex items-center rounded-md px-2 py-0.5 text-xs font-semibold {classes} {ring}"
  hx-get="{url}" hx-target="#filter-bar" hx-swap="outerHTML" aria-pressed="{active}">{label}</button>"##
    )
}

fn render_show_modes(state: &BarState) -> String {
    let buttons: String = [
        (ShowMode::All, "All"),
        (ShowMode::Collected, "Collected"),
        (ShowMode::Uncollected, "Uncollected"),
    ]
    .iter()
    .map(|&(mode, label)| {
        let classes = if state.show == mode {
            "bg-primary text-primary-foreground shadow-md"
        } else {
            "border bg-background"
        };
        filter_button(label, classes, state.show == mode, &state.bar_url(&state.filter, mode))
    })
    .collect();
    format!(r#"<div class="flex gap-2">{buttons}</div>"#)
}

fn render_bar(state: &BarState) -> String {
    let target = state.target;
    let filter = &state.filter;

    let hidden: String = state
        .grid_pairs()
        .into_iter()
        .filter(|(k, _)| *k != "search")
        .map(|(k, v)| format!(r#"<input type="hidden" name="{k}" value="{}">"#, escape_html(&v)))
        .collect();

    let elements: String = ALL_ELEMENTS
        .iter()
        .map(|&e| {
            filter_button(
                e.as_str(),
                e.badge_classes(),
                filter.element == Some(e),
                &state.bar_url(&filter.toggled_element(e), state.show),
            )
        })
        .collect();

    let types: String = ALL_TYPES
        .iter()
        .map(|&t| {
            filter_button(
                t.as_str(),
                "bg-secondary text-secondary-foreground",
                filter.monster_type == Some(t),
                &state.bar_url(&filter.toggled_type(t), state.show),
            )
        })
        .collect();

    let show_modes = if target == Target::Collection {
        render_show_modes(state)
    } else {
        String::new()
    };

    let clear = if filter.is_active() {
        format!(
            r##"<button type="button" class="text-xs underline" hx-get="{url}" hx-target="#filter-bar" hx-swap="outerHTML">Clear filters</button>"##,
            url = state.bar_url(&MonsterFilter::default(), state.show),
        )
    } else {
        String::new()
    };

    format!(
        r##"<div id="filter-bar" class="space-y-3" data-target="{name}">
  {hidden}
  <input type="search" name="search" value="{search}" placeholder="Search monsters..." class="w-full h-9 rounded-md border px-3"
    hx-get="{endpoint}" hx-trigger="input changed delay:300ms, search" hx-include="#filter-bar" hx-target="#{grid}" hx-swap="innerHTML">
  {show_modes}
  <div class="space-y-2.5 border rounded-lg p-3 bg-muted/30">
    <div class="space-y-1.5"><span class="text-xs font-medium">Element</span><div class="flex flex-wrap gap-1">{elements}</div></div>
    <div class="space-y-1.5"><span class="text-xs font-medium">Type</span><div class="flex flex-wrap gap-1">{types}</div></div>
  </div>
  {clear}
  <div hx-get="{endpoint}?{query}" hx-trigger="load" hx-target="#{grid}" hx-swap="innerHTML"></div>
</div>"##,
        name = target.name(),
        search = escape_html(&filter.search),
        endpoint = target.endpoint(),
        grid = target.grid_id(),
        query = encode_query(&state.grid_pairs()),
    )
}

/// Handle GET /api/filters
pub fn handle(query: &str) -> String {
    let params = parse_query(query);
    let state = BarState {
        target: Target::parse(get_param(&params, "target")),
        filter: MonsterFilter::from_params(&params),
        show: get_param(&params, "show")
            .and_then(ShowMode::parse)
            .unwrap_or_default(),
    };
    render_bar(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_element_and_type() {
        let html = handle("");
        assert_eq!(html.matches("class=\"filter-btn").count(), 5 + 18);
        assert!(html.contains("hx-target=\"#monsters-grid\""));
        assert!(!html.contains("Clear filters"));
    }

    #[test]
    fn active_element_is_highlighted_and_toggles_off() {
        let html = handle("?element=Fire");
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert!(html.contains(r#"<input type="hidden" name="element" value="Fire">"#));
        assert!(html.contains("Clear filters"));
        // The grid reload carries the filter.
        assert!(html.contains(r#"hx-get="/api/monsters?element=Fire" hx-trigger="load""#));
        // Pressing Fire again goes back to no element.
        assert!(html.contains(r#"hx-get="/api/filters?target=monsters" hx-target"#));
    }

    #[test]
    fn search_is_preserved_and_escaped() {
        let html = handle("?search=%3Cb%3E");
        assert!(html.contains(r#"value="&lt;b&gt;""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn collection_target_adds_show_modes() {
        let html = handle("?target=collection&show=uncollected&type=Heal");
        assert!(html.contains("hx-target=\"#collection-grid\""));
        assert!(html.contains(">Uncollected</button>"));
        assert!(html.contains(r#"hx-get="/api/collection?type=Heal&show=uncollected" hx-trigger="load""#));
        assert!(html.contains(r#"<input type="hidden" name="show" value="uncollected">"#));
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let html = handle("?target=nowhere&element=Lightning&show=some");
        assert!(html.contains("data-target=\"monsters\""));
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 0);
    }
}
