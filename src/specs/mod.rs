// src/specs/mod.rs
//! # Page "specs"
//!
//! Knowledge of how the wiki lays out a page, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML reading** of a fetched troop page: tier and wage markers, the
//!   "Equipment" section table, the mount row.
//! - **Name heuristics** used when the page is silent (tier and mounted keywords).
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), ID assignment, culture bookkeeping, item-map
//!   resolution and SQL/JSON output (`scrape`, `sql`).
//!
//! ## Conventions
//! - Case-insensitive tag detection through `core::html`.
//! - Everything is testable offline against captured page HTML.
pub mod troop_page;
