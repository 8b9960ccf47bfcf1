// src/items/search.rs
use crate::config::consts::{SEARCH_FUZZY_CUTOFF, SEARCH_SUGGESTIONS};

use super::fuzzy::close_matches;
use super::map::{ItemMap, ItemRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// Case-insensitive substring hits, sorted by name.
    Matches(Vec<(String, ItemRecord)>),
    /// No substring hit; closest names instead (possibly none).
    Suggestions(Vec<String>),
}

pub fn search(map: &ItemMap, query: &str) -> SearchResult {
    let needle = query.to_lowercase();
    let mut hits: Vec<(String, ItemRecord)> = map
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(name, rec)| (s!(name), rec.clone()))
        .collect();

    if hits.is_empty() {
        let near = close_matches(query, map.names(), SEARCH_SUGGESTIONS, SEARCH_FUZZY_CUTOFF);
        return SearchResult::Suggestions(near.into_iter().map(String::from).collect());
    }
    hits.sort_by(|a, b| a.0.cmp(&b.0));
    SearchResult::Matches(hits)
}
