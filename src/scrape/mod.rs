// src/scrape/mod.rs
mod model;
mod run;
mod scrape;
mod upgrades;

pub use model::{Cultures, EquipmentLink, ScrapeResult, Troop, TroopDocument, UpgradeEdge};
pub use run::{list_category, run, run_with, RunSummary};
pub use scrape::{faction_troop_names, scrape_troops};
pub use upgrades::build_upgrade_paths;
