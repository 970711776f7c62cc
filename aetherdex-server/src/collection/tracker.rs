//! The collected set and the queries the collection page renders from it.

use std::collections::HashSet;
use std::rc::Rc;

use log::{info, warn};
use time::OffsetDateTime;

use super::file::{self, CollectionFile, ExportError, ImportError};
use crate::catalog::{MonsterPair, find_monster, monster_pairs, monsters};
use crate::config::COLLECTION_KEY;
use crate::filters::MonsterFilter;
use crate::store::{KeyValueStorage, LocalCache};

/// Which pairs the collection grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowMode {
    #[default]
    All,
    /// Pairs with at least one collected member.
    Collected,
    /// Pairs with at least one member still missing.
    Uncollected,
}

impl ShowMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "collected" => Some(Self::Collected),
            "uncollected" => Some(Self::Uncollected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Collected => "collected",
            Self::Uncollected => "uncollected",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub total: usize,
    pub collected: usize,
    pub base_total: usize,
    pub base_collected: usize,
    pub shifted_total: usize,
    pub shifted_collected: usize,
}

impl CollectionStats {
    pub fn completion_percentage(&self) -> u32 {
        percentage(self.collected, self.total)
    }
}

/// `part / total` as a whole percentage, rounded half up; 0 for an empty total.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

pub struct CollectionTracker {
    ids: LocalCache<Vec<String>>,
}

impl CollectionTracker {
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            ids: LocalCache::load(storage, COLLECTION_KEY, Vec::new()),
        }
    }

    /// Ids in collection order, exactly as stored.
    pub fn collected_ids(&self) -> &[String] {
        self.ids.get()
    }

    pub fn is_collected(&self, id: &str) -> bool {
        self.ids.get().iter().any(|c| c == id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now
    /// collected. Ids outside the catalog are left alone.
    pub fn toggle(&mut self, id: &str) -> bool {
        if find_monster(id).is_none() {
            warn!("ignoring toggle for unknown monster id \"{id}\"");
            return false;
        }
        self.ids.update(|ids| {
            if let Some(pos) = ids.iter().position(|c| c == id) {
                ids.remove(pos);
                false
            } else {
                ids.push(id.to_string());
                true
            }
        })
    }

    pub fn replace(&mut self, ids: Vec<String>) {
        self.ids.set(ids);
    }

    pub fn export(&self, now: OffsetDateTime) -> Result<CollectionFile, ExportError> {
        CollectionFile::new(self.ids.get().clone(), now)
    }

    /// Parse and validate `text`, then replace the whole collected set.
    /// On failure nothing changes. Returns the number of imported ids.
    pub fn import_text(&mut self, text: &str) -> Result<usize, ImportError> {
        let imported = file::parse(text)?;
        let count = imported.collected_ids.len();
        self.replace(imported.collected_ids);
        info!("imported {count} collected monsters");
        Ok(count)
    }

    pub fn stats(&self) -> CollectionStats {
        let collected: HashSet<&str> = self.ids.get().iter().map(String::as_str).collect();
        let mut stats = CollectionStats::default();
        for monster in monsters() {
            let have = collected.contains(monster.id);
            stats.total += 1;
            stats.collected += usize::from(have);
            if monster.is_shifted() {
                stats.shifted_total += 1;
                stats.shifted_collected += usize::from(have);
            } else {
                stats.base_total += 1;
                stats.base_collected += usize::from(have);
            }
        }
        stats
    }

    /// Pairs for the grid, sorted by base name. A pair passes `filter` when
    /// either member matches it.
    pub fn pairs(&self, show: ShowMode, filter: &MonsterFilter) -> Vec<MonsterPair> {
        monster_pairs()
            .into_iter()
            .filter(|pair| pair.members().any(|m| filter.matches(m)))
            .filter(|pair| match show {
                ShowMode::All => true,
                ShowMode::Collected => pair.members().any(|m| self.is_collected(m.id)),
                ShowMode::Uncollected => pair.members().any(|m| !self.is_collected(m.id)),
            })
            .collect()
    }
}
