// src/scrape/run.rs
use std::path::PathBuf;

use crate::{
    config::{options::ScrapeOptions, trees::FACTIONS},
    core::{PageSource, WikiClient},
    error::Result,
    file,
    items::ItemMap,
    progress::Progress,
    sql::troops::generate_sql,
};

use super::{model::ScrapeResult, scrape::scrape_troops};

/// Summary of what was produced.
pub struct RunSummary {
    pub result: ScrapeResult,
    pub sql: String,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner against the live wiki.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    // Checked before the client exists so a missing map costs no requests.
    let item_map = file::read_item_map(&opts.item_map)?;
    logf!("loaded item map with {} items", item_map.len());
    let mut client = WikiClient::new(&opts.api_url)?;
    run_with(&mut client, &item_map, opts, progress)
}

/// Scrape from any page source and write the SQL and JSON artifacts.
pub fn run_with(
    source: &mut dyn PageSource,
    item_map: &ItemMap,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let result = scrape_troops(source, FACTIONS, item_map, opts, progress);
    let sql = generate_sql(&result);

    file::write_text(&opts.sql_out, &sql)?;
    file::write_json(&opts.json_out, &result.document())?;
    logf!(
        "wrote {} and {} ({} troops)",
        opts.sql_out.display(),
        opts.json_out.display(),
        result.troops.len()
    );

    Ok(RunSummary {
        result,
        sql,
        files_written: vec![opts.sql_out.clone(), opts.json_out.clone()],
    })
}

/// Titles in a wiki category.
pub fn list_category(opts: &ScrapeOptions, category: &str) -> Result<Vec<String>> {
    WikiClient::new(&opts.api_url)?.category_members(category)
}
