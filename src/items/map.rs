// src/items/map.rs
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub slot: String,
}

impl ItemRecord {
    pub fn new(id: i64, slot: &str) -> Self {
        Self { id, slot: s!(slot) }
    }
}

/// Name → record, in insertion order. Names are unique; first write wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMap {
    entries: Vec<(String, ItemRecord)>,
    index: HashMap<String, usize>,
}

impl ItemMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the name is already taken. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, name: &str, record: ItemRecord) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(s!(name), self.entries.len());
        self.entries.push((s!(name), record));
        true
    }

    /// Copy `target`'s record under `alias` when `alias` is absent and `target` present.
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        if self.contains(alias) {
            return false;
        }
        match self.get(target).cloned() {
            Some(rec) => self.insert_if_absent(alias, rec),
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ItemRecord> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemRecord)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn slot_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, rec) in &self.entries {
            *counts.entry(rec.slot.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Id → name (a later name wins for shared ids) plus slot counts.
    pub fn reverse(&self) -> ReverseIndex {
        let id_to_name = self
            .entries
            .iter()
            .map(|(n, r)| (r.id, n.clone()))
            .collect();
        ReverseIndex { id_to_name, slot_counts: self.slot_counts() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseIndex {
    pub id_to_name: BTreeMap<i64, String>,
    pub slot_counts: BTreeMap<String, usize>,
}

/* ---------------- JSON shape: {"name": {"id": .., "slot": ..}, ...} ---------------- */

impl Serialize for ItemMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rec) in &self.entries {
            m.serialize_entry(name, rec)?;
        }
        m.end()
    }
}

impl<'de> Deserialize<'de> for ItemMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = ItemMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of item name → {id, slot}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ItemMap, A::Error> {
                let mut map = ItemMap::new();
                while let Some((name, rec)) = access.next_entry::<String, ItemRecord>()? {
                    map.insert_if_absent(&name, rec);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemMap {
        let mut m = ItemMap::new();
        m.insert_if_absent("Hunter", ItemRecord::new(40, "horses"));
        m.insert_if_absent("Falchion", ItemRecord::new(7, "melee_weapons"));
        m.insert_if_absent("Old Falchion", ItemRecord::new(7, "melee_weapons"));
        m
    }

    #[test]
    fn first_write_wins() {
        let mut m = sample();
        assert!(!m.insert_if_absent("Hunter", ItemRecord::new(99, "items")));
        assert_eq!(m.get("Hunter"), Some(&ItemRecord::new(40, "horses")));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn alias_never_overwrites_and_needs_target() {
        let mut m = sample();
        assert!(m.alias("Horse", "Hunter"));
        assert_eq!(m.get("Horse").unwrap().id, 40);
        assert!(!m.alias("Horse", "Falchion"));
        assert_eq!(m.get("Horse").unwrap().id, 40);
        assert!(!m.alias("Bow", "Hunting Bow"));
        assert!(!m.contains("Bow"));
    }

    #[test]
    fn json_keeps_insertion_order() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"Hunter":{"id":40,"slot":"horses"},"Falchion":{"id":7,"slot":"melee_weapons"},"Old Falchion":{"id":7,"slot":"melee_weapons"}}"#
        );
        let back: ItemMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["Hunter", "Falchion", "Old Falchion"]);
    }

    #[test]
    fn reverse_index_last_name_wins_for_shared_id() {
        let r = sample().reverse();
        assert_eq!(r.id_to_name.get(&7).map(String::as_str), Some("Old Falchion"));
        assert_eq!(r.slot_counts.get("melee_weapons"), Some(&2));
        assert_eq!(r.slot_counts.get("horses"), Some(&1));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["id_to_name"]["40"], "Hunter");
        assert_eq!(json["slot_counts"]["horses"], 1);
    }
}
