// src/items/mod.rs
//! Item map: wiki/game item names → `{id, slot}`.
//!
//! Built from an ordered list of CSV sources on top of a type lookup.
//! The first source to mention a name owns it; later duplicates are dropped.
//! Two alias passes then add wiki spellings that the game data lacks.
pub mod builder;
pub mod fuzzy;
pub mod map;
pub mod search;
pub mod types;

pub use builder::{build, build_map, BuildReport, SourceOutcome};
pub use map::{ItemMap, ItemRecord, ReverseIndex};
pub use search::{search, SearchResult};
pub use types::TypeLookup;
