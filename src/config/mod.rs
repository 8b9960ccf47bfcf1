// src/config/mod.rs
//! Paths, defaults and the declarative tables the tools run on.
pub mod aliases;
pub mod consts;
pub mod keywords;
pub mod options;
pub mod sources;
pub mod trees;
