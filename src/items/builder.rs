// src/items/builder.rs
use std::path::Path;

use crate::config::aliases::{CURATED_ALIASES, GENERIC_ALIASES};
use crate::config::consts::{ALIAS_FUZZY_CUTOFF, ITEM_TYPES_FILE};
use crate::config::options::BuildOptions;
use crate::config::sources::{SourceSpec, SOURCES, TYPE_ID_COL, TYPE_NAME_COL};
use crate::csv::{parse_int, Row, Table};
use crate::error::Result;
use crate::file;

use super::fuzzy::best_match;
use super::map::{ItemMap, ItemRecord};
use super::types::TypeLookup;

/// What happened to one configured source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOutcome {
    Loaded { new_items: usize, rows: usize },
    Skipped(String),
}

/// How a curated alias was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasMatch {
    Exact(String),
    Fuzzy(String),
}

#[derive(Clone, Debug, Default)]
pub struct BuildReport {
    pub type_count: usize,
    pub sources: Vec<(&'static str, SourceOutcome)>,
    /// (generic, specific)
    pub generic_added: Vec<(String, String)>,
    pub curated_added: Vec<(String, AliasMatch)>,
}

/// Build the map and write both artifacts. Nothing is written when the
/// type lookup cannot be loaded.
pub fn build(opts: &BuildOptions) -> Result<(ItemMap, BuildReport)> {
    let (map, report) = build_map(&opts.source_dir, SOURCES)?;

    file::write_json(&opts.map_out, &map)?;
    logf!("wrote {} ({} items)", opts.map_out.display(), map.len());

    file::write_json(&opts.reverse_out, &map.reverse())?;
    logf!("wrote {}", opts.reverse_out.display());

    Ok((map, report))
}

/// Build the map in memory from `dir`: type lookup, sources in order, then aliases.
pub fn build_map(dir: &Path, sources: &[SourceSpec]) -> Result<(ItemMap, BuildReport)> {
    let lookup = TypeLookup::load(&dir.join(ITEM_TYPES_FILE))?;
    logf!("loaded {} item types", lookup.len());

    let mut report = BuildReport { type_count: lookup.len(), ..Default::default() };
    let mut map = ItemMap::new();

    for spec in sources {
        let outcome = load_source(&dir.join(spec.file), spec, &lookup, &mut map);
        match &outcome {
            SourceOutcome::Loaded { new_items, .. } => logf!("loaded {new_items} new items from {}", spec.file),
            SourceOutcome::Skipped(why) => logw!("skipping {}: {why}", spec.file),
        }
        report.sources.push((spec.file, outcome));
    }

    report.generic_added = apply_generic_aliases(&mut map, GENERIC_ALIASES);
    report.curated_added = apply_curated_aliases(&mut map, CURATED_ALIASES, ALIAS_FUZZY_CUTOFF);

    Ok((map, report))
}

/// Merge one source into `map`. Any problem with the file skips the source.
pub fn load_source(path: &Path, spec: &SourceSpec, lookup: &TypeLookup, map: &mut ItemMap) -> SourceOutcome {
    if !path.exists() {
        return SourceOutcome::Skipped(format!("file not found: {}", path.display()));
    }
    let table = match Table::read(path) {
        Ok(t) => t,
        Err(e) => return SourceOutcome::Skipped(e.to_string()),
    };
    merge_table(&table, spec, lookup, map)
}

pub fn merge_table(table: &Table, spec: &SourceSpec, lookup: &TypeLookup, map: &mut ItemMap) -> SourceOutcome {
    let (id_col, name_col) = match (table.col(spec.id_col), table.col(spec.name_col)) {
        (Some(i), Some(n)) => (i, n),
        _ => {
            return SourceOutcome::Skipped(format!(
                "missing columns: '{}' or '{}'",
                spec.id_col, spec.name_col
            ));
        }
    };
    let type_id_col = table.col(TYPE_ID_COL);
    let type_name_col = table.col(TYPE_NAME_COL);

    let mut new_items = 0;
    for row in table.rows() {
        let name = row.get(name_col);
        let raw_id = row.get(id_col);
        let Some(id) = parse_int(raw_id) else {
            logw!("{}: row {}: bad id '{}', skipped", spec.file, row.line, raw_id);
            continue;
        };
        if name.is_empty() {
            logw!("{}: row {}: empty name, skipped", spec.file, row.line);
            continue;
        }

        let slot = resolve_slot(&row, type_id_col, type_name_col, lookup, spec.default_slot);
        if map.insert_if_absent(name, ItemRecord::new(id, &slot)) {
            new_items += 1;
        } else {
            logd!("{}: duplicate '{}' dropped", spec.file, name);
        }
    }
    SourceOutcome::Loaded { new_items, rows: table.len() }
}

/// Slot for one row: explicit type id, else a known type name, else the source default.
pub fn resolve_slot(
    row: &Row<'_>,
    type_id_col: Option<usize>,
    type_name_col: Option<usize>,
    lookup: &TypeLookup,
    default_slot: &str,
) -> String {
    if let Some(raw) = row.opt(type_id_col) {
        return parse_int(raw)
            .and_then(|id| lookup.slot_for_id(id))
            .unwrap_or(default_slot)
            .to_string();
    }
    if let Some(raw) = row.opt(type_name_col) {
        let candidate = raw.to_lowercase().replace(' ', "_");
        if lookup.is_known_slot(&candidate) {
            return candidate;
        }
    }
    s!(default_slot)
}

/// Add generic names for specific items. Never overwrites.
pub fn apply_generic_aliases(map: &mut ItemMap, table: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut added = Vec::new();
    for &(generic, specific) in table {
        if map.alias(generic, specific) {
            logf!("added generic '{generic}' mapping from '{specific}'");
            added.push((s!(generic), s!(specific)));
        }
    }
    added
}

/// Add curated wiki names. Unknown targets fall back to the closest existing name.
pub fn apply_curated_aliases(
    map: &mut ItemMap,
    table: &[(&str, Option<&str>)],
    cutoff: f64,
) -> Vec<(String, AliasMatch)> {
    let mut added = Vec::new();
    for &(alias, target) in table {
        if map.contains(alias) {
            continue;
        }
        if let Some(t) = target.filter(|t| map.contains(t)) {
            map.alias(alias, t);
            added.push((s!(alias), AliasMatch::Exact(s!(t))));
            continue;
        }
        let Some(found) = best_match(alias, map.names(), cutoff).map(String::from) else {
            logd!("no close match for '{alias}'");
            continue;
        };
        map.alias(alias, &found);
        logf!("fuzzy matched '{alias}' to '{found}'");
        added.push((s!(alias), AliasMatch::Fuzzy(found)));
    }
    added
}
