//! HTML pieces shared by the team builder and collection fragments.

use crate::catalog::{Element, Monster, MonsterType};
use crate::routes::util::escape_html;

pub fn element_badge(element: Element) -> String {
    format!(
        r#"<span class="inline-flex items-center rounded-md px-2 py-0.5 text-xs font-semibold {}">{}</span>"#,
        element.badge_classes(),
        element.as_str()
    )
}

pub fn type_badge(monster_type: MonsterType) -> String {
    format!(
        r#"<span class="inline-flex items-center rounded-md px-2 py-0.5 text-xs bg-secondary text-secondary-foreground">{}</span>"#,
        monster_type.as_str()
    )
}

/// Element badges row followed by type badges row.
pub fn monster_badges(monster: &Monster) -> String {
    let elements: String = monster.elements.iter().map(|&e| element_badge(e)).collect();
    let types: String = monster.types.iter().map(|&t| type_badge(t)).collect();
    format!(
        r#"<div class="flex flex-wrap gap-1 justify-center">{elements}</div>
<div class="flex flex-wrap gap-1 justify-center">{types}</div>"#
    )
}

/// `<img>` for the monster, or nothing when it has no artwork.
pub fn monster_image(monster: &Monster, class: &str) -> String {
    match monster.image {
        Some(src) => format!(
            r#"<img src="{src}" alt="{alt}" loading="lazy" class="{class}">"#,
            alt = escape_html(monster.name)
        ),
        None => String::new(),
    }
}

/// `"1 monster"` / `"3 monsters"`
pub fn monster_count(n: usize) -> String {
    if n == 1 {
        "1 monster".to_string()
    } else {
        format!("{n} monsters")
    }
}
