// src/config/sources.rs

/// One tabular source feeding the item map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    pub file: &'static str,
    pub default_slot: &'static str,
    pub id_col: &'static str,
    pub name_col: &'static str,
}

/// Merge order. Earlier sources win on duplicate names.
pub const SOURCES: &[SourceSpec] = &[
    SourceSpec { file: "items.csv",          default_slot: "items",          id_col: "Item_ID",   name_col: "Item_Name" },
    SourceSpec { file: "armors.csv",         default_slot: "armors",         id_col: "Item_ID",   name_col: "Item_Name" },
    SourceSpec { file: "melee_weapons.csv",  default_slot: "melee_weapons",  id_col: "Item_ID",   name_col: "Item_Name" },
    SourceSpec { file: "ranged_weapons.csv", default_slot: "ranged_weapons", id_col: "Item_ID",   name_col: "Item_Name" },
    SourceSpec { file: "shields.csv",        default_slot: "shields",        id_col: "Shield_ID", name_col: "Shield_name" },
    SourceSpec { file: "mounts.csv",         default_slot: "horses",         id_col: "Mount_ID",  name_col: "Mount_Name" },
];

// Optional per-row slot columns
pub const TYPE_ID_COL: &str = "Item_Type_ID";
pub const TYPE_NAME_COL: &str = "Item_Type";

// Type lookup columns
pub const LOOKUP_ID_COL: &str = "Item_Type_ID";
pub const LOOKUP_NAME_COL: &str = "Item_Type_Name";
