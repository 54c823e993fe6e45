// src/harvest.rs
//! Index harvester: listing pages → deduplicated, date-ordered link manifest.

use std::path::Path;

use chrono::NaiveDate;
use url::Url;

use crate::config::consts::OFFSET_PLACEHOLDER;
use crate::config::options::{HarvestOptions, ManifestOrder};
use crate::core::net::Fetch;
use crate::error::{ConfigError, StoreError};
use crate::file::{read_json, write_json_pretty};
use crate::model::LinkEntry;
use crate::pacing::StopFlag;
use crate::progress::Progress;
use crate::specs::listing::parse_listing;

/// `0, step, 2*step, … ≤ max`. A zero step means the single offset 0.
pub fn offsets(step: usize, max: usize) -> Vec<usize> {
    if step == 0 {
        return vec![0];
    }
    (0..=max).step_by(step).collect()
}

/// Listing URL for one offset. Templates without `{offset}` come back unchanged.
pub fn listing_url(template: &str, offset: usize) -> String {
    template.replace(OFFSET_PLACEHOLDER, &offset.to_string())
}

/// Append entries whose title is not yet present. Returns how many were added.
pub fn merge_unique(acc: &mut Vec<LinkEntry>, found: Vec<LinkEntry>) -> usize {
    let before = acc.len();
    for entry in found {
        if !acc.iter().any(|e| e.title == entry.title) {
            acc.push(entry);
        }
    }
    acc.len() - before
}

/// Newest first. Stable, so equal dates keep discovery order.
pub fn order_entries(entries: &mut [LinkEntry], order: ManifestOrder) {
    match order {
        ManifestOrder::Lexical => entries.sort_by(|a, b| b.date.cmp(&a.date)),
        ManifestOrder::Chronological => {
            // dates that only look like dates (e.g. 31.02.2024) sort last
            entries.sort_by_key(|e| std::cmp::Reverse(calendar_date(&e.date)))
        }
    }
}

fn calendar_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d.%m.%Y").ok()
}

/// Walk every listing offset and collect unique event rows, ordered.
/// Failed pages are reported and skipped; a stop request ends the walk early
/// and returns what was found so far.
pub fn harvest(
    opts: &HarvestOptions,
    fetcher: &dyn Fetch,
    stop: &StopFlag,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<LinkEntry>, ConfigError> {
    let base = Url::parse(&opts.base_url).map_err(|source| ConfigError::BaseUrl {
        value: opts.base_url.clone(),
        source,
    })?;

    let pages = offsets(opts.page_step, opts.max_offset);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut found: Vec<LinkEntry> = Vec::new();
    for (i, offset) in pages.into_iter().enumerate() {
        if stop.is_set() {
            break;
        }
        let url = listing_url(&opts.listing_url, offset);
        if let Some(p) = progress.as_deref_mut() {
            p.item_started(i, &url);
        }

        match fetcher.get(&url) {
            Ok(doc) => {
                let rows = parse_listing(&doc, &base);
                let seen = rows.len();
                let added = merge_unique(&mut found, rows);
                logd!("Listing: s={offset} rows={seen} new={added}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &format!("s={offset}: {seen} rows, {added} new"));
                }
            }
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &url, &e.to_string());
                }
            }
        }

        if !stop.pause(opts.page_delay) {
            break;
        }
    }

    order_entries(&mut found, opts.order);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(found)
}

pub fn save_manifest(path: &Path, entries: &[LinkEntry]) -> Result<(), StoreError> {
    write_json_pretty(path, entries)
}

/// Missing manifest is an error here: the details stage has nothing to do without it.
pub fn load_manifest(path: &Path) -> Result<Vec<LinkEntry>, StoreError> {
    read_json(path)?.ok_or_else(|| {
        StoreError::io(path, std::io::Error::new(std::io::ErrorKind::NotFound, "manifest not found"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str) -> LinkEntry {
        LinkEntry { title: s!(title), link: format!("https://x.test/{title}"), date: s!(date) }
    }

    fn dates(entries: &[LinkEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.date.as_str()).collect()
    }

    #[test]
    fn offsets_are_inclusive_of_max() {
        assert_eq!(offsets(100, 300), [0, 100, 200, 300]);
        assert_eq!(offsets(100, 250), [0, 100, 200]);
        assert_eq!(offsets(100, 0), [0]);
        assert_eq!(offsets(0, 1500), [0]);
        assert_eq!(offsets(100, 1500).len(), 16);
    }

    #[test]
    fn offset_is_threaded_into_the_url() {
        assert_eq!(listing_url("https://x.test/?page=4&s={offset}", 200), "https://x.test/?page=4&s=200");
        assert_eq!(listing_url("https://x.test/?page=4&s=0", 200), "https://x.test/?page=4&s=0");
    }

    #[test]
    fn first_title_wins() {
        let mut acc = vec![entry("A", "01.01.2024")];
        let added = merge_unique(
            &mut acc,
            vec![entry("B", "02.01.2024"), LinkEntry { date: s!("09.09.2020"), ..entry("A", "") }, entry("B", "03.01.2024")],
        );
        assert_eq!(added, 1);
        assert_eq!(dates(&acc), ["01.01.2024", "02.01.2024"]);
    }

    #[test]
    fn chronological_order_is_newest_first() {
        let mut v = vec![
            entry("a", "05.01.2023"),
            entry("b", "31.12.2022"),
            entry("c", "04.01.2024"),
            entry("d", "31.02.2024"),
            entry("e", "05.01.2023"),
        ];
        order_entries(&mut v, ManifestOrder::Chronological);
        let titles: Vec<&str> = v.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["c", "a", "e", "b", "d"]);
    }

    #[test]
    fn lexical_order_sorts_day_first() {
        let mut v = vec![entry("a", "05.01.2023"), entry("b", "31.12.2022"), entry("c", "04.01.2024")];
        order_entries(&mut v, ManifestOrder::Lexical);
        assert_eq!(dates(&v), ["31.12.2022", "05.01.2023", "04.01.2024"]);
    }

    #[test]
    fn manifest_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        let v = vec![entry("Wrestle Kingdom 18", "04.01.2024"), entry("Dominion", "09.06.2024")];
        save_manifest(&path, &v).unwrap();
        assert_eq!(load_manifest(&path).unwrap(), v);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"title\": \"Wrestle Kingdom 18\""));

        assert!(load_manifest(&dir.path().join("missing.json")).is_err());
    }
}
