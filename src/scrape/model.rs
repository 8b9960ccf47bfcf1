// src/scrape/model.rs
use std::collections::BTreeSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Troop {
    pub name: String,
    pub tier: u8,
    pub wage: u32,
    pub is_mounted: bool,
    pub faction: String,
    pub troop_id: u32,
    pub culture_id: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpgradeEdge {
    pub base_troop_id: u32,
    pub upgraded_troop_id: u32,
    pub xp_cost: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EquipmentLink {
    pub troop_id: u32,
    pub item_id: i64,
    pub slot: String,
}

/// Culture name → sequential id, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cultures {
    ids: Vec<(String, u32)>,
}

impl Cultures {
    pub fn get_or_create(&mut self, name: &str) -> u32 {
        if let Some(id) = self.get(name) {
            return id;
        }
        let id = self.ids.len() as u32 + 1;
        self.ids.push((s!(name), id));
        id
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.ids.iter().find(|(n, _)| n == name).map(|&(_, id)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ids.iter().map(|(n, id)| (n.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Serialize for Cultures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.ids.len()))?;
        for (name, id) in &self.ids {
            m.serialize_entry(name, id)?;
        }
        m.end()
    }
}

/// Everything one scrape run produced.
#[derive(Clone, Debug, Default)]
pub struct ScrapeResult {
    pub troops: Vec<Troop>,
    pub cultures: Cultures,
    pub upgrade_paths: Vec<UpgradeEdge>,
    /// Resolved links as found, duplicates included.
    pub raw_links: usize,
    pub equipment: BTreeSet<EquipmentLink>,
    pub missing_items: BTreeSet<String>,
}

impl ScrapeResult {
    pub fn document(&self) -> TroopDocument<'_> {
        TroopDocument {
            troops: &self.troops,
            cultures: &self.cultures,
            upgrade_paths: &self.upgrade_paths,
        }
    }

    pub fn troops_in_culture(&self, culture_id: u32) -> usize {
        self.troops.iter().filter(|t| t.culture_id == culture_id).count()
    }
}

/// The JSON artifact.
#[derive(Serialize)]
pub struct TroopDocument<'a> {
    pub troops: &'a [Troop],
    pub cultures: &'a Cultures,
    pub upgrade_paths: &'a [UpgradeEdge],
}
