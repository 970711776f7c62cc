//! Three-slot team builder. Team state lives only in the session.

use crate::catalog::{Element, Monster, MonsterType, find_monster};

pub const TEAM_SIZE: usize = 3;

/// Outcome of [`Team::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Added(usize),
    Removed(usize),
    Full,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    slots: [Option<&'static Monster>; TEAM_SIZE],
}

/// Element and type tallies over the filled slots, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    pub elements: Vec<(Element, usize)>,
    pub types: Vec<(MonsterType, usize)>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<&'static Monster>; TEAM_SIZE] {
        &self.slots
    }

    pub fn members(&self) -> impl Iterator<Item = &'static Monster> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.members().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|m| m.id == id))
    }

    /// Toggle `id` on the team: remove it if present, otherwise place it in
    /// the first empty slot.
    pub fn select(&mut self, id: &str) -> Selection {
        if let Some(slot) = self.position(id) {
            self.slots[slot] = None;
            return Selection::Removed(slot);
        }
        let Some(monster) = find_monster(id) else {
            return Selection::Unknown;
        };
        match self.slots.iter().position(Option::is_none) {
            Some(slot) => {
                self.slots[slot] = Some(monster);
                Selection::Added(slot)
            }
            None => Selection::Full,
        }
    }

    /// Empty one slot. Returns the monster that was there.
    pub fn remove(&mut self, slot: usize) -> Option<&'static Monster> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn clear(&mut self) {
        self.slots = [None; TEAM_SIZE];
    }

    pub fn composition(&self) -> Composition {
        let mut elements = Vec::new();
        let mut types = Vec::new();
        for monster in self.members() {
            for &element in monster.elements {
                tally(&mut elements, element);
            }
            for &monster_type in &monster.types {
                tally(&mut types, monster_type);
            }
        }
        // Stable sort keeps first-seen order among equal counts.
        elements.sort_by(|a, b| b.1.cmp(&a.1));
        types.sort_by(|a, b| b.1.cmp(&a.1));
        Composition { elements, types }
    }
}

fn tally<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}
