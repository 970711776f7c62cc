//! Static monster catalog: elements, types, and the 56-entry monster table.
//!
//! The table is read-only and compiled in. Shifted variants are ordinary
//! entries whose id is the base id plus [`SHIFTED_SUFFIX`]; nothing links
//! them structurally, so pairing is done by id at query time.

mod data;

use std::collections::BTreeMap;

pub use data::MONSTERS;

/// Id suffix marking a shifted variant.
pub const SHIFTED_SUFFIX: &str = "-shifted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Earth,
    Fire,
    Water,
    Wind,
    Wild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonsterType {
    Aether,
    Affliction,
    Age,
    Burn,
    Critical,
    Dodge,
    Force,
    Heal,
    Poison,
    Power,
    Regeneration,
    Shield,
    Sidekick,
    Summon,
    Tank,
    Terror,
    Weakness,
    Purge,
}

pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Earth,
    Element::Fire,
    Element::Water,
    Element::Wind,
    Element::Wild,
];

pub const ALL_TYPES: [MonsterType; 18] = [
    MonsterType::Aether,
    MonsterType::Affliction,
    MonsterType::Age,
    MonsterType::Burn,
    MonsterType::Critical,
    MonsterType::Dodge,
    MonsterType::Force,
    MonsterType::Heal,
    MonsterType::Poison,
    MonsterType::Power,
    MonsterType::Regeneration,
    MonsterType::Shield,
    MonsterType::Sidekick,
    MonsterType::Summon,
    MonsterType::Tank,
    MonsterType::Terror,
    MonsterType::Weakness,
    MonsterType::Purge,
];

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Earth => "Earth",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Wind => "Wind",
            Element::Wild => "Wild",
        }
    }

    /// Tailwind classes for the element badge (shade 600, hover 700, white text).
    pub fn badge_classes(self) -> &'static str {
        match self {
            Element::Earth => "bg-yellow-600 hover:bg-yellow-700 text-white",
            Element::Fire => "bg-red-600 hover:bg-red-700 text-white",
            Element::Water => "bg-blue-600 hover:bg-blue-700 text-white",
            Element::Wind => "bg-green-600 hover:bg-green-700 text-white",
            Element::Wild => "bg-purple-600 hover:bg-purple-700 text-white",
        }
    }
}

impl MonsterType {
    pub fn as_str(self) -> &'static str {
        match self {
            MonsterType::Aether => "Aether",
            MonsterType::Affliction => "Affliction",
            MonsterType::Age => "Age",
            MonsterType::Burn => "Burn",
            MonsterType::Critical => "Critical",
            MonsterType::Dodge => "Dodge",
            MonsterType::Force => "Force",
            MonsterType::Heal => "Heal",
            MonsterType::Poison => "Poison",
            MonsterType::Power => "Power",
            MonsterType::Regeneration => "Regeneration",
            MonsterType::Shield => "Shield",
            MonsterType::Sidekick => "Sidekick",
            MonsterType::Summon => "Summon",
            MonsterType::Tank => "Tank",
            MonsterType::Terror => "Terror",
            MonsterType::Weakness => "Weakness",
            MonsterType::Purge => "Purge",
        }
    }
}

/// Parse an element from its display name (case-insensitive).
pub fn parse_element(s: &str) -> Option<Element> {
    ALL_ELEMENTS
        .iter()
        .copied()
        .find(|e| e.as_str().eq_ignore_ascii_case(s))
}

/// Parse a monster type from its display name (case-insensitive).
pub fn parse_type(s: &str) -> Option<MonsterType> {
    ALL_TYPES
        .iter()
        .copied()
        .find(|t| t.as_str().eq_ignore_ascii_case(s))
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub id: &'static str,
    pub name: &'static str,
    /// One to three distinct elements.
    pub elements: &'static [Element],
    pub types: [MonsterType; 3],
    pub image: Option<&'static str>,
}

impl Monster {
    pub fn is_shifted(&self) -> bool {
        self.id.ends_with(SHIFTED_SUFFIX)
    }

    /// The id of the base form; a base monster returns its own id.
    pub fn base_id(&self) -> &'static str {
        self.id.strip_suffix(SHIFTED_SUFFIX).unwrap_or(self.id)
    }

    pub fn shifted_id(&self) -> String {
        format!("{}{}", self.base_id(), SHIFTED_SUFFIX)
    }

    pub fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    pub fn has_type(&self, monster_type: MonsterType) -> bool {
        self.types.contains(&monster_type)
    }
}

/// A base monster and its shifted variant, if the catalog has one.
#[derive(Debug, Clone, Copy)]
pub struct MonsterPair {
    pub base: &'static Monster,
    pub shifted: Option<&'static Monster>,
}

impl MonsterPair {
    pub fn members(&self) -> impl Iterator<Item = &'static Monster> {
        std::iter::once(self.base).chain(self.shifted)
    }
}

/// The five elements in display order. Returns a fresh vector on every call.
pub fn list_elements() -> Vec<Element> {
    ALL_ELEMENTS.to_vec()
}

/// The eighteen types in display order. Returns a fresh vector on every call.
pub fn list_types() -> Vec<MonsterType> {
    ALL_TYPES.to_vec()
}

pub fn monsters() -> &'static [Monster] {
    &MONSTERS
}

pub fn find_monster(id: &str) -> Option<&'static Monster> {
    MONSTERS.iter().find(|m| m.id == id)
}

pub fn is_monster_id(id: &str) -> bool {
    find_monster(id).is_some()
}

/// Every catalog entry keyed by id, as an owned copy the caller may mutate.
pub fn monsters_by_id() -> BTreeMap<&'static str, Monster> {
    MONSTERS.iter().map(|m| (m.id, m.clone())).collect()
}

/// All monsters sorted by display name.
pub fn sorted_by_name() -> Vec<&'static Monster> {
    let mut sorted: Vec<&Monster> = MONSTERS.iter().collect();
    sorted.sort_by_key(|m| m.name.to_lowercase());
    sorted
}

/// Base monsters paired with their shifted variants, sorted by base name.
pub fn monster_pairs() -> Vec<MonsterPair> {
    let mut pairs: Vec<MonsterPair> = MONSTERS
        .iter()
        .filter(|m| !m.is_shifted())
        .map(|base| MonsterPair {
            base,
            shifted: find_monster(&base.shifted_id()),
        })
        .collect();
    pairs.sort_by_key(|p| p.base.name.to_lowercase());
    pairs
}
