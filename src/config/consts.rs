// src/config/consts.rs

// Item map
pub const DEFAULT_SOURCE_DIR: &str = "items";
pub const ITEM_TYPES_FILE: &str = "items_types_ids.csv";
pub const ITEM_MAP_FILE: &str = "item_map.json";
pub const ITEM_MAP_REVERSE_FILE: &str = "item_map_reverse.json";

// Approximate matching
pub const ALIAS_FUZZY_CUTOFF: f64 = 0.7;
pub const SEARCH_FUZZY_CUTOFF: f64 = 0.6;
pub const SEARCH_SUGGESTIONS: usize = 5;
pub const SEARCH_SHOWN: usize = 20;
pub const SAMPLE_SHOWN: usize = 10;

// SQL emitter
pub const DEFAULT_ITEMS_CSV: &str = "items/items.csv";

// Net config
pub const WIKI_API_URL: &str = "https://mountandblade.fandom.com/api.php";
pub const USER_AGENT: &str = "BannerlordTroopScraper/1.0";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const TROOPS_SQL_FILE: &str = "bannerlord_troops.sql";
pub const TROOPS_JSON_FILE: &str = "bannerlord_troops.json";
pub const MISSING_SHOWN: usize = 20;
pub const SQL_PREVIEW_LINES: usize = 30;
