// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows *where the ground truth lives* in one kind of cagematch.net
//! page and turns a fetched HTML string into typed records.
//!
//! ## What lives here
//! - **Pure HTML parsing** (`&str` in, records out). No networking, no disk.
//! - **Selector choice** and the fallbacks used when markup drifts.
//! - **Defaulting** of absent structure: a missing block degrades a field, it
//!   never fails the page.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), pacing and interrupts (`runner`, `pacing`).
//! - Persistence (`harvest::save_manifest`, `store::YearStore`).
//!
//! ## Typical call chain
//! ```text
//! runner → harvest::harvest → specs::listing::parse_listing → Vec<LinkEntry>
//! runner → extract::extract → specs::event::parse_event     → EventRecord
//!                                      ↘ store::YearStore::append
//! ```
//!
//! ## Current specs
//! - `listing` – event rows of a promotion's event table (`?id=8&…&page=4`).
//! - `event`   – a single card page (`?id=1&nr=…`): info box, matches, roster.
//!
//! Specs are tested offline against small inline fixtures that mirror the
//! site's markup.
pub mod event;
pub mod listing;
