// src/bin/item_map.rs
use clap::Parser;
use troopdb::cli::{self, ItemMapArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    troopdb::log::init();
    cli::item_map(ItemMapArgs::parse())?;
    Ok(())
}
