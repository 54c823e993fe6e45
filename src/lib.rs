// src/lib.rs
//! Scraper for cagematch.net event cards.
//!
//! Two offline stages: `harvest` walks the listing pages into a link manifest,
//! `runner::run_details` turns every manifest entry into an `EventRecord` and
//! files it into a per-year JSON collection through `store::YearStore`.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod extract;
pub mod file;
pub mod harvest;
pub mod pacing;
pub mod progress;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
