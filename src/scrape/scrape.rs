// src/scrape/scrape.rs
use std::collections::HashSet;
use std::thread;

use crate::{
    config::{options::ScrapeOptions, trees::FactionTree},
    core::PageSource,
    items::ItemMap,
    progress::Progress,
    specs::troop_page,
};

use super::{
    model::{EquipmentLink, ScrapeResult, Troop},
    upgrades::build_upgrade_paths,
};

/// Every troop of a faction, common paths first, first-seen order.
pub fn faction_troop_names(tree: &FactionTree) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    tree.paths()
        .flat_map(|path| path.iter().copied())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Fetch and parse every troop page of `trees`, in order.
/// A page that cannot be fetched skips its troop; ids stay contiguous.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn scrape_troops(
    source: &mut dyn PageSource,
    trees: &[FactionTree],
    item_map: &ItemMap,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeResult {
    let mut result = ScrapeResult::default();
    let mut next_id: u32 = 1;

    'factions: for tree in trees {
        let culture_id = result.cultures.get_or_create(tree.culture);
        let names = faction_troop_names(tree);
        logd!("{}: {} troops to scrape", tree.faction, names.len());
        if let Some(p) = progress.as_deref_mut() {
            p.begin(tree.faction, names.len());
        }

        for name in names {
            if opts.max_troops.is_some_and(|max| result.troops.len() >= max) {
                let msg = format!("Troop limit reached ({}), stopping", result.troops.len());
                logf!("{msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&msg);
                }
                break 'factions;
            }

            let page = match source.fetch_page(name) {
                Ok(page) => page,
                Err(e) => {
                    logw!("{}: {}", name, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(name, &e.to_string());
                    }
                    continue;
                }
            };

            let parsed = troop_page::parse(&page.html, name);
            for entry in &parsed.equipment {
                match item_map.get(&entry.name) {
                    Some(item) => {
                        result.raw_links += 1;
                        result.equipment.insert(EquipmentLink {
                            troop_id: next_id,
                            item_id: item.id,
                            slot: item.slot.clone(),
                        });
                    }
                    None => {
                        logd!("{}: no item named {:?} ({})", name, entry.name, entry.row_slot);
                        result.missing_items.insert(entry.name.clone());
                    }
                }
            }

            let troop = Troop {
                name: s!(name),
                tier: parsed.tier,
                wage: parsed.wage,
                is_mounted: parsed.is_mounted,
                faction: s!(tree.faction),
                troop_id: next_id,
                culture_id,
            };
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&troop);
            }
            result.troops.push(troop);
            next_id += 1;

            if !opts.delay.is_zero() {
                thread::sleep(opts.delay);
            }
        }
    }

    result.upgrade_paths = build_upgrade_paths(trees, &result.troops);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
