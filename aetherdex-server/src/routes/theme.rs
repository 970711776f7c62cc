//! `/api/theme` routes: theme picker and applying the effective theme.
//!
//! The module may run where `matchMedia` is out of reach, so the caller
//! reports the system color scheme as `prefers_dark=true|false`.

use crate::routes::util::{error_fragment, get_flag, get_param, parse_form_body, parse_query};
use crate::session::{with_session, with_session_mut};
use crate::theme::{ALL_THEMES, EffectiveTheme, Theme};

/// Toggle the `dark` class on the document root.
fn apply_script(effective: EffectiveTheme) -> String {
    format!(
        "<script>document.documentElement.classList.toggle('dark', {});</script>",
        effective.is_dark()
    )
}

fn render_picker(current: Theme, effective: EffectiveTheme) -> String {
    let buttons: String = ALL_THEMES
        .iter()
        .map(|&theme| {
            let active = theme == current;
            let classes = if active {
                "bg-primary text-primary-foreground"
            } else {
                "hover:bg-accent"
            };
            format!(
                r##"<button type="button" class="theme-option rounded-md px-3 py-1.5 text-sm {classes}"
  hx-post="/api/theme" hx-vals='{{"theme":"{value}"}}' hx-include="#theme-prefers-dark" hx-target="#theme-picker" hx-swap="innerHTML"
  aria-pressed="{active}">{label}</button>"##,
                value = theme.as_str(),
                label = theme.label(),
            )
        })
        .collect();
    format!(
        r#"<div class="flex gap-1" role="group" aria-label="Theme">{buttons}</div>{script}"#,
        script = apply_script(effective),
    )
}

/// Handle GET /api/theme?prefers_dark=true|false
pub fn handle_get(query: &str) -> String {
    let params = parse_query(query);
    let prefers_dark = get_flag(&params, "prefers_dark");
    with_session(|s| render_picker(s.theme.theme(), s.theme.effective(prefers_dark)))
}

/// Handle POST /api/theme
/// Body params: `theme=light|dark|system`, `prefers_dark=true|false`
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let Some(theme) = get_param(&params, "theme").and_then(Theme::parse) else {
        return error_fragment("Invalid theme (expected light, dark or system)");
    };
    let prefers_dark = get_flag(&params, "prefers_dark");
    with_session_mut(|s| {
        s.theme.set_theme(theme);
        render_picker(s.theme.theme(), s.theme.effective(prefers_dark))
    })
}
