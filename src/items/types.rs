// src/items/types.rs
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::sources::{LOOKUP_ID_COL, LOOKUP_NAME_COL};
use crate::csv::{parse_int, Table};
use crate::error::{Error, Result};

/// Item type id → slot name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeLookup {
    by_id: BTreeMap<i64, String>,
}

impl TypeLookup {
    /// Load the lookup table. Every failure here is fatal to the map build.
    pub fn load(path: &Path) -> Result<Self> {
        let fatal = |reason: String| Error::TypeLookup { path: path.to_path_buf(), reason };

        if !path.exists() {
            return Err(fatal(s!("file not found")));
        }
        let table = Table::read(path).map_err(|e| fatal(e.to_string()))?;
        let id_col = table.require(LOOKUP_ID_COL).map_err(|e| fatal(e.to_string()))?;
        let name_col = table.require(LOOKUP_NAME_COL).map_err(|e| fatal(e.to_string()))?;

        let mut by_id = BTreeMap::new();
        for row in table.rows() {
            let raw = row.get(id_col);
            let Some(id) = parse_int(raw) else {
                logw!("{}: row {}: bad type id '{}', skipped", path.display(), row.line, raw);
                continue;
            };
            by_id.insert(id, s!(row.get(name_col)));
        }
        Ok(Self { by_id })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self { by_id: pairs.into_iter().map(|(id, n)| (id, n.into())).collect() }
    }

    pub fn slot_for_id(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn is_known_slot(&self, name: &str) -> bool {
        self.by_id.values().any(|v| v == name)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
