// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory holding the source tables and the type lookup.
    pub source_dir: PathBuf,
    pub map_out: PathBuf,
    pub reverse_out: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            map_out: PathBuf::from(ITEM_MAP_FILE),
            reverse_out: PathBuf::from(ITEM_MAP_REVERSE_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqlOptions {
    pub input: PathBuf,
    /// None → stdout
    pub out: Option<PathBuf>,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_ITEMS_CSV),
            out: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub item_map: PathBuf,
    pub sql_out: PathBuf,
    pub json_out: PathBuf,
    pub api_url: String,
    /// Pause after each recorded troop. Zero disables.
    pub delay: Duration,
    /// Stop once this many troops were recorded.
    pub max_troops: Option<usize>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            item_map: PathBuf::from(ITEM_MAP_FILE),
            sql_out: PathBuf::from(TROOPS_SQL_FILE),
            json_out: PathBuf::from(TROOPS_JSON_FILE),
            api_url: s!(WIKI_API_URL),
            delay: Duration::from_millis(REQUEST_PAUSE_MS),
            max_troops: None,
        }
    }
}
