// src/specs/troop_page.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::keywords::{
    DEFAULT_TIER, DEFAULT_WAGE, EQUIPMENT_SLOTS, MOUNTED_KEYWORDS, TIER_KEYWORDS, TIER_WAGES, TIER_WORDS,
};
use crate::core::html::{section_table, split_on_br, table_rows};
use crate::core::sanitize::clean_item_name;

static TIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)tier-(\w+)").expect("tier pattern"));
static WAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*denars?/day").expect("wage pattern"));

const EQUIPMENT_SECTION: &str = "Equipment";
const MOUNT_LABEL: &str = "mount";

/// One labelled row of the Equipment table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentRow {
    /// Lowercased row label, e.g. "body armor".
    pub label: String,
    /// Visible cell text.
    pub text: String,
    /// Cell pieces split on line breaks, tags stripped.
    pub pieces: Vec<String>,
}

/// An item name as listed on the page, with the slot its row maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentEntry {
    pub row_slot: &'static str,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TroopPage {
    pub tier: u8,
    pub wage: u32,
    pub is_mounted: bool,
    pub equipment: Vec<EquipmentEntry>,
}

/// Read everything the scraper needs from one troop page.
pub fn parse(html: &str, troop_name: &str) -> TroopPage {
    let rows = equipment_rows(html);
    let tier = tier(html, troop_name);
    TroopPage {
        tier,
        wage: wage(html, tier),
        is_mounted: is_mounted(troop_name, &rows),
        equipment: equipment(&rows),
    }
}

/// Rows of the table under the Equipment heading. Empty when there is none.
pub fn equipment_rows(html: &str) -> Vec<EquipmentRow> {
    let Some(table) = section_table(html, EQUIPMENT_SECTION) else {
        return Vec::new();
    };
    table_rows(table)
        .into_iter()
        .filter(|cells| cells.len() >= 2)
        .map(|cells| EquipmentRow {
            label: cells[0].text().to_lowercase(),
            text: cells[1].text(),
            pieces: split_on_br(&cells[1].inner),
        })
        .collect()
}

/// `tier-<word>` marker on the page, else the name heuristic.
pub fn tier(html: &str, troop_name: &str) -> u8 {
    TIER_RE
        .captures(html)
        .and_then(|c| {
            let word = c[1].to_lowercase();
            TIER_WORDS.iter().find(|(w, _)| *w == word).map(|&(_, t)| t)
        })
        .unwrap_or_else(|| estimate_tier(troop_name))
}

pub fn estimate_tier(troop_name: &str) -> u8 {
    let name = troop_name.to_lowercase();
    TIER_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| name.contains(w)))
        .map_or(DEFAULT_TIER, |&(tier, _)| tier)
}

/// `<n> denars/day` on the page, else by tier.
pub fn wage(html: &str, tier: u8) -> u32 {
    WAGE_RE
        .captures(html)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or_else(|| estimate_wage(tier))
}

pub fn estimate_wage(tier: u8) -> u32 {
    TIER_WAGES
        .iter()
        .find(|(t, _)| *t == tier)
        .map_or(DEFAULT_WAGE, |&(_, w)| w)
}

/// Mount row decides when it says something definite; otherwise the name does.
pub fn is_mounted(troop_name: &str, rows: &[EquipmentRow]) -> bool {
    if let Some(row) = rows.iter().find(|r| r.label == MOUNT_LABEL) {
        let value = row.text.trim();
        if value.eq_ignore_ascii_case("n/a") {
            return false;
        }
        if !value.is_empty() && value != "?" {
            return true;
        }
    }
    let name = troop_name.to_lowercase();
    MOUNTED_KEYWORDS.iter().any(|k| name.contains(k))
}

/// Item names per known row label, cleaned of qualifiers and placeholders.
pub fn equipment(rows: &[EquipmentRow]) -> Vec<EquipmentEntry> {
    let mut out = Vec::new();
    for row in rows {
        let text = row.text.trim();
        if text.to_lowercase().contains("n/a") || text == "?" {
            continue;
        }
        let Some(&(_, slot)) = EQUIPMENT_SLOTS.iter().find(|(label, _)| *label == row.label) else {
            continue;
        };
        out.extend(
            row.pieces
                .iter()
                .filter_map(|p| clean_item_name(p))
                .map(|name| EquipmentEntry { row_slot: slot, name }),
        );
    }
    out
}
