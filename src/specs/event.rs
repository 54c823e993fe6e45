// src/specs/event.rs
//! Event *spec*: one card page into an `EventRecord`.
//!
//! Layout relied on:
//! - info box: `div.InformationBoxTitle` / `div.InformationBoxContents`, paired
//!   by position (the site exposes no stable field ids, only label/value pairs),
//! - matches: `div.Match` with optional `div.MatchType` and `div.MatchResults`,
//! - roster: a `div.Caption` reading "All workers" followed by a `div.Comments`.
//!
//! Every part is optional. Missing structure leaves the seeded default in place.

use scraper::{ElementRef, Html};

use crate::core::html::{first, has_class, next_element_siblings, raw_text, text_of};
use crate::core::sanitize::clean_label;
use crate::model::{EventRecord, MatchRecord};

const ROSTER_CAPTION: &str = "all workers";

pub fn parse_event(doc: &str, url: &str, original_title: &str) -> EventRecord {
    let html = Html::parse_document(doc);
    let mut record = EventRecord::new(url, original_title);

    read_info_box(&html, &mut record);
    record.matches = read_matches(&html);
    record.all_workers = read_roster(&html).unwrap_or_default();

    record
}

fn read_info_box(html: &Html, record: &mut EventRecord) {
    let titles = html.select(selector!("div.InformationBoxTitle"));
    let contents = html.select(selector!("div.InformationBoxContents"));

    // zip stops at the shorter list
    for (title, content) in titles.zip(contents) {
        let label = clean_label(&raw_text(title));
        let value = text_of(content);
        if !record.set_info(&label, &value) {
            logd!("Info box: dropped label {label:?} on {}", record.url);
        }
    }
}

fn read_matches(html: &Html) -> Vec<MatchRecord> {
    html.select(selector!("div.Match"))
        .filter_map(|m| {
            let kind = first(m, selector!("div.MatchType")).map(text_of).unwrap_or_default();
            let result = first(m, selector!("div.MatchResults")).map(text_of).unwrap_or_default();
            if kind.is_empty() && result.is_empty() {
                return None;
            }
            Some(MatchRecord::new(&kind, &result))
        })
        .collect()
}

fn read_roster(html: &Html) -> Option<String> {
    let caption = html
        .select(selector!("div.Caption"))
        .find(|c| text_of(*c).to_lowercase().contains(ROSTER_CAPTION))?;

    let is_comments = |e: &ElementRef| e.value().name() == "div" && has_class(*e, "Comments");
    let block = next_element_siblings(caption)
        .find(is_comments)
        .or_else(|| {
            next_element_siblings(caption)
                .next()
                .filter(|e| !has_class(*e, "Caption"))
        })?;

    Some(text_of(block))
}
