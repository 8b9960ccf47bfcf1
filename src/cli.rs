// src/cli.rs
//! Command-line front ends for the three tools.
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{consts::*, options::{BuildOptions, ScrapeOptions, SqlOptions}},
    error::Result,
    file,
    items::{self, builder::AliasMatch, BuildReport, SearchResult, SourceOutcome},
    progress::Progress,
    scrape::{self, RunSummary, Troop},
    sql,
};

const RULE: &str = "============================================================";

/* ---------------- item-map ---------------- */

#[derive(Debug, Parser)]
#[command(name = "item-map", version, about = "Build the item name → {id, slot} map from the game CSVs")]
pub struct ItemMapArgs {
    #[command(subcommand)]
    pub command: Option<ItemMapCommand>,

    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Directory with the source CSVs and item_types.csv
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    #[arg(long, default_value = ITEM_MAP_FILE)]
    pub out: PathBuf,

    #[arg(long, default_value = ITEM_MAP_REVERSE_FILE)]
    pub reverse_out: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum ItemMapCommand {
    /// Look a name up in an existing map
    Search {
        #[arg(required = true)]
        query: Vec<String>,

        #[arg(long, default_value = ITEM_MAP_FILE)]
        map: PathBuf,
    },
}

pub fn item_map(args: ItemMapArgs) -> Result<()> {
    match args.command {
        Some(ItemMapCommand::Search { query, map }) => search(&map, &query.join(" ")),
        None => {
            let opts = BuildOptions {
                source_dir: args.build.source_dir,
                map_out: args.build.out,
                reverse_out: args.build.reverse_out,
            };
            let (map, report) = items::build(&opts)?;
            print_build_report(&map, &report, &opts);
            Ok(())
        }
    }
}

fn print_build_report(map: &items::ItemMap, report: &BuildReport, opts: &BuildOptions) {
    println!("Loaded {} item types", report.type_count);
    for (file, outcome) in &report.sources {
        match outcome {
            SourceOutcome::Loaded { new_items, rows } => {
                println!("  {file}: {new_items} new items ({rows} rows)")
            }
            SourceOutcome::Skipped(why) => println!("  {file}: skipped ({why})"),
        }
    }
    for (generic, specific) in &report.generic_added {
        println!("  alias: {generic} -> {specific}");
    }
    for (alias, how) in &report.curated_added {
        match how {
            AliasMatch::Exact(target) => println!("  alias: {alias} -> {target}"),
            AliasMatch::Fuzzy(target) => println!("  alias: {alias} ~> {target}"),
        }
    }

    println!("\nTotal items mapped: {}", map.len());
    println!("Items by slot:");
    for (slot, count) in map.slot_counts() {
        println!("  {slot}: {count}");
    }
    println!("\nSample item mappings:");
    for line in sample_mappings(map, SAMPLE_SHOWN) {
        println!("{line}");
    }
    println!("\nSaved {} and {}", opts.map_out.display(), opts.reverse_out.display());
}

/// First `n` entries in map order, one aligned line each.
fn sample_mappings(map: &items::ItemMap, n: usize) -> Vec<String> {
    map.iter()
        .take(n)
        .map(|(name, rec)| format!("  {name:30} → ID={:4}, Slot={}", rec.id, rec.slot))
        .collect()
}

fn search(path: &std::path::Path, query: &str) -> Result<()> {
    let map = file::read_item_map(path)?;
    match items::search(&map, query) {
        SearchResult::Matches(hits) => {
            println!("Found {} matches for '{query}':", hits.len());
            for (name, rec) in hits.iter().take(SEARCH_SHOWN) {
                println!("  {name}: ID {}, slot {}", rec.id, rec.slot);
            }
            if hits.len() > SEARCH_SHOWN {
                println!("  ... and {} more", hits.len() - SEARCH_SHOWN);
            }
        }
        SearchResult::Suggestions(near) if near.is_empty() => {
            println!("No matches for '{query}'");
        }
        SearchResult::Suggestions(near) => {
            println!("No matches for '{query}'. Did you mean:");
            for name in near {
                println!("  {name}");
            }
        }
    }
    Ok(())
}

/* ---------------- items-sql ---------------- */

#[derive(Debug, Parser)]
#[command(name = "items-sql", version, about = "Emit Item_Types and Items INSERT statements from items.csv")]
pub struct ItemsSqlArgs {
    #[arg(long, default_value = DEFAULT_ITEMS_CSV)]
    pub input: PathBuf,

    /// Write here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn items_sql(args: ItemsSqlArgs) -> Result<()> {
    sql::items::run(&SqlOptions { input: args.input, out: args.out })
}

/* ---------------- troop-scrape ---------------- */

#[derive(Debug, Parser)]
#[command(name = "troop-scrape", version, about = "Scrape troop pages from the wiki into SQL and JSON")]
pub struct TroopScrapeArgs {
    #[arg(long, default_value = ITEM_MAP_FILE)]
    pub item_map: PathBuf,

    #[arg(long, default_value = TROOPS_SQL_FILE)]
    pub sql_out: PathBuf,

    #[arg(long, default_value = TROOPS_JSON_FILE)]
    pub json_out: PathBuf,

    /// Pause after each troop page, 0 disables
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Stop after this many troops
    #[arg(long)]
    pub max_troops: Option<usize>,

    #[arg(long, default_value = WIKI_API_URL)]
    pub api_url: String,

    /// List the pages of a wiki category and exit
    #[arg(long)]
    pub category: Option<String>,
}

impl TroopScrapeArgs {
    pub fn options(&self) -> ScrapeOptions {
        ScrapeOptions {
            item_map: self.item_map.clone(),
            sql_out: self.sql_out.clone(),
            json_out: self.json_out.clone(),
            api_url: self.api_url.clone(),
            delay: Duration::from_millis(self.delay_ms),
            max_troops: self.max_troops,
        }
    }
}

pub fn troop_scrape(args: TroopScrapeArgs) -> Result<()> {
    let opts = args.options();

    if let Some(category) = &args.category {
        let members = scrape::list_category(&opts, category)?;
        println!("{} pages in Category:{category}", members.len());
        for title in members {
            println!("  {title}");
        }
        return Ok(());
    }

    println!("{RULE}\nMount & Blade II: Bannerlord Troop Data Scraper\n{RULE}");
    let mut progress = ConsoleProgress;
    let summary = scrape::run(&opts, Some(&mut progress))?;
    print_scrape_report(&summary);
    Ok(())
}

fn print_scrape_report(summary: &RunSummary) {
    let r = &summary.result;
    println!("\n{RULE}\nScraping Complete!\n{RULE}");
    println!("Total troops: {}", r.troops.len());
    println!("Total cultures: {}", r.cultures.len());
    println!("Total upgrade paths: {}", r.upgrade_paths.len());
    println!("Total equipment links: {}", r.raw_links);
    println!("Unique equipment entries: {}", r.equipment.len());

    if !r.missing_items.is_empty() {
        println!("\nWarning: {} items not found in item map:", r.missing_items.len());
        for item in r.missing_items.iter().take(MISSING_SHOWN) {
            println!("  - {item}");
        }
        if r.missing_items.len() > MISSING_SHOWN {
            println!("  ... and {} more", r.missing_items.len() - MISSING_SHOWN);
        }
    }

    println!("\nTroops per faction:");
    for (culture, id) in r.cultures.iter() {
        println!("  {culture}: {} troops", r.troops_in_culture(id));
    }

    for path in &summary.files_written {
        println!("\nSaved {}", path.display());
    }

    println!("\n{RULE}\nSample Output (first {SQL_PREVIEW_LINES} lines):\n{RULE}");
    let lines: Vec<&str> = summary.sql.split('\n').collect();
    for line in lines.iter().take(SQL_PREVIEW_LINES) {
        println!("{line}");
    }
    if lines.len() > SQL_PREVIEW_LINES {
        println!("...\n\n(Total {} lines in SQL file)", lines.len());
    }
}

/// Prints one line per troop to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, faction: &str, total: usize) {
        println!("\n{RULE}\nProcessing {faction}\n{RULE}");
        println!("Found {total} troops to scrape");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, troop: &Troop) {
        println!(
            "  {}: tier {}, wage {}, mounted {}",
            troop.name, troop.tier, troop.wage, troop.is_mounted
        );
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        println!("  {name}: failed to fetch page ({reason})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_flags_map_to_options() {
        let args = TroopScrapeArgs::parse_from([
            "troop-scrape", "--delay-ms", "0", "--max-troops", "5", "--sql-out", "out/t.sql",
        ]);
        let opts = args.options();
        assert!(opts.delay.is_zero());
        assert_eq!(opts.max_troops, Some(5));
        assert_eq!(opts.sql_out, PathBuf::from("out/t.sql"));
        assert_eq!(opts.item_map, PathBuf::from(ITEM_MAP_FILE));
        assert_eq!(opts.api_url, WIKI_API_URL);
    }

    #[test]
    fn scrape_defaults_match_options_default() {
        let args = TroopScrapeArgs::parse_from(["troop-scrape"]);
        assert_eq!(args.options(), ScrapeOptions::default());
    }

    #[test]
    fn item_map_search_subcommand() {
        let args = ItemMapArgs::parse_from(["item-map", "search", "arming", "sword"]);
        match args.command {
            Some(ItemMapCommand::Search { query, map }) => {
                assert_eq!(query.join(" "), "arming sword");
                assert_eq!(map, PathBuf::from(ITEM_MAP_FILE));
            }
            None => panic!("expected search"),
        }
    }

    #[test]
    fn sample_mappings_take_the_first_entries_in_order() {
        let mut map = items::ItemMap::new();
        for (i, name) in ["Falchion", "Hunter", "Padded Coat"].into_iter().enumerate() {
            map.insert_if_absent(name, items::ItemRecord::new(i as i64 + 7, "armors"));
        }
        let lines = sample_mappings(&map, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  {:30} → ID=   7, Slot=armors", "Falchion"));
        assert!(lines[1].starts_with("  Hunter "));
        assert_eq!(sample_mappings(&map, SAMPLE_SHOWN).len(), 3);
    }

    #[test]
    fn item_map_build_flags() {
        let args = ItemMapArgs::parse_from(["item-map", "--source-dir", "data"]);
        assert!(args.command.is_none());
        assert_eq!(args.build.source_dir, PathBuf::from("data"));
        assert_eq!(args.build.out, PathBuf::from(ITEM_MAP_FILE));
    }
}
