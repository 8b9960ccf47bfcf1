// src/bin/troop_scrape.rs
use clap::Parser;
use troopdb::cli::{self, TroopScrapeArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    troopdb::log::init();
    cli::troop_scrape(TroopScrapeArgs::parse())?;
    Ok(())
}
