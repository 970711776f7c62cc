//! Search/element/type filtering shared by the team builder grid and the
//! collection grid.

use crate::catalog::{Element, Monster, MonsterType, parse_element, parse_type};
use crate::routes::util::get_param;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterFilter {
    /// Case-insensitive substring matched against the display name.
    pub search: String,
    pub element: Option<Element>,
    pub monster_type: Option<MonsterType>,
}

impl MonsterFilter {
    /// Build a filter from `search`, `element` and `type` request params.
    /// Unknown element/type names are ignored.
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self {
            search: get_param(params, "search").unwrap_or("").trim().to_string(),
            element: get_param(params, "element").and_then(parse_element),
            monster_type: get_param(params, "type").and_then(parse_type),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.element.is_some() || self.monster_type.is_some()
    }

    pub fn matches(&self, monster: &Monster) -> bool {
        if !self.search.is_empty()
            && !monster
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if let Some(element) = self.element {
            if !monster.has_element(element) {
                return false;
            }
        }
        if let Some(monster_type) = self.monster_type {
            if !monster.has_type(monster_type) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, monsters: impl IntoIterator<Item = &'a Monster>) -> Vec<&'a Monster> {
        monsters.into_iter().filter(|m| self.matches(m)).collect()
    }

    /// The set criteria as `search`/`element`/`type` query pairs.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(element) = self.element {
            pairs.push(("element", element.as_str().to_string()));
        }
        if let Some(monster_type) = self.monster_type {
            pairs.push(("type", monster_type.as_str().to_string()));
        }
        pairs
    }

    /// Same filter with `element` switched on, or off if already selected.
    pub fn toggled_element(&self, element: Element) -> Self {
        Self {
            element: (self.element != Some(element)).then_some(element),
            ..self.clone()
        }
    }

    pub fn toggled_type(&self, monster_type: MonsterType) -> Self {
        Self {
            monster_type: (self.monster_type != Some(monster_type)).then_some(monster_type),
            ..self.clone()
        }
    }
}
