// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod specs;

pub mod file;
pub mod items;
pub mod progress;
pub mod scrape;
pub mod sql;

pub use error::{Error, Result};
