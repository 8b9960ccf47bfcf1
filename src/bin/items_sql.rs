// src/bin/items_sql.rs
use clap::Parser;
use troopdb::cli::{self, ItemsSqlArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    troopdb::log::init();
    cli::items_sql(ItemsSqlArgs::parse())?;
    Ok(())
}
