// src/model.rs
//! Records that cross stage boundaries: the harvested `LinkEntry` and the
//! extracted `EventRecord`. Field names are the JSON names on disk.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_MATCH_TYPE, NOT_AVAILABLE, SEEDED_INFO_KEYS};
use crate::core::sanitize;

/// One row of a listing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    /// Absolute URL of the card page.
    pub link: String,
    /// `DD.MM.YYYY`
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Result")]
    pub result: String,
}

impl MatchRecord {
    /// Empty parts fall back to "Match" / "not available".
    pub fn new(kind: &str, result: &str) -> Self {
        Self {
            kind: if kind.is_empty() { s!(DEFAULT_MATCH_TYPE) } else { s!(kind) },
            result: if result.is_empty() { s!(NOT_AVAILABLE) } else { s!(result) },
        }
    }
}

/// Keys owned by the record itself; page labels with these names are dropped.
pub const RESERVED_KEYS: [&str; 5] = ["OriginalTitle", "NumberOfEpisode", "Url", "Matches", "AllWorkers"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventRecord {
    pub original_title: String,
    pub number_of_episode: String,
    pub url: String,
    /// General-info fields, label -> value, in page order after the seeded keys.
    #[serde(flatten)]
    pub info: IndexMap<String, String>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub all_workers: String,
}

impl EventRecord {
    /// Fresh record with the known info keys seeded empty.
    pub fn new(url: &str, original_title: &str) -> Self {
        let info = SEEDED_INFO_KEYS
            .iter()
            .map(|k| (s!(*k), s!()))
            .collect();
        Self {
            original_title: s!(original_title),
            number_of_episode: sanitize::episode_number(original_title),
            url: s!(url),
            info,
            matches: Vec::new(),
            all_workers: s!(),
        }
    }

    /// Insert or overwrite a general-info field. Returns false when the label was dropped.
    pub fn set_info(&mut self, label: &str, value: &str) -> bool {
        if label.is_empty() || RESERVED_KEYS.contains(&label) {
            return false;
        }
        self.info.insert(s!(label), s!(value));
        true
    }

    pub fn info(&self, label: &str) -> Option<&str> {
        self.info.get(label).map(String::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.info("Date").filter(|d| !d.is_empty())
    }

    pub fn has_roster(&self) -> bool {
        !self.all_workers.is_empty()
    }
}
