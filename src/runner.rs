// src/runner.rs
//! Stage orchestration. Strictly sequential: one fetch, one extraction, one
//! append at a time, with the configured pause after each.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::options::AppOptions;
use crate::core::net::Fetch;
use crate::error::RunError;
use crate::extract::extract;
use crate::harvest::{harvest, load_manifest, save_manifest};
use crate::model::{EventRecord, LinkEntry};
use crate::pacing::StopFlag;
use crate::progress::Progress;
use crate::store::YearStore;

/// What the harvest stage produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    pub entries: usize,
    pub manifest: PathBuf,
    pub interrupted: bool,
}

/// What the details stage produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events saved per partition key during this run.
    pub per_partition: BTreeMap<String, usize>,
    /// Manifest entries looked at (≤ manifest length when limited or interrupted).
    pub attempted: usize,
    pub saved: usize,
    pub failed: usize,
    pub interrupted: bool,
}

impl RunSummary {
    fn record_saved(&mut self, key: &str) {
        *self.per_partition.entry(s!(key)).or_insert(0) += 1;
        self.saved += 1;
    }
}

/// Stage 1: listing pages → manifest file. Whatever was found is written,
/// even when the walk was interrupted.
pub fn run_harvest(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    stop: &StopFlag,
    progress: Option<&mut dyn Progress>,
) -> Result<HarvestSummary, RunError> {
    let entries = harvest(&opts.harvest, fetcher, stop, progress)?;
    save_manifest(&opts.harvest.manifest_path, &entries)?;
    Ok(HarvestSummary {
        entries: entries.len(),
        manifest: opts.harvest.manifest_path.clone(),
        interrupted: stop.is_set(),
    })
}

/// Stage 2: manifest → per-year files.
pub fn run_details(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    stop: &StopFlag,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let manifest = load_manifest(&opts.extract.manifest_path).map_err(RunError::Manifest)?;
    let store = YearStore::new(&opts.store);
    Ok(process_entries(opts, &manifest, fetcher, &store, stop, progress))
}

/// The per-item loop of `run_details`, over an in-memory manifest.
pub fn process_entries(
    opts: &AppOptions,
    manifest: &[LinkEntry],
    fetcher: &dyn Fetch,
    store: &YearStore,
    stop: &StopFlag,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let take = opts.extract.limit.unwrap_or(manifest.len()).min(manifest.len());
    let items = &manifest[..take];
    let mut summary = RunSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(items.len());
    }

    for (i, item) in items.iter().enumerate() {
        if stop.is_set() {
            break;
        }
        summary.attempted += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.item_started(i, &item.title);
        }

        match extract(fetcher, &item.link, &item.title) {
            Ok(record) => {
                let detail = describe(&record);
                match store.append(record) {
                    Ok(key) => {
                        summary.record_saved(&key);
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(i, &format!("{detail} | Year: {key}"));
                        }
                    }
                    Err(e) => {
                        summary.failed += 1;
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(i, &item.title, &format!("could not save: {e}"));
                        }
                    }
                }
            }
            Err(e) => {
                summary.failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &item.title, &e.to_string());
                }
            }
        }

        if !stop.pause(opts.extract.detail_delay) {
            break;
        }
    }

    summary.interrupted = stop.is_set();
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

/// One card page straight into the store. Returns the partition key and the record.
pub fn run_single(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    url: &str,
    title: &str,
) -> Result<(String, EventRecord), RunError> {
    let record = extract(fetcher, url, title)?;
    let store = YearStore::new(&opts.store);
    let key = store.append(record.clone())?;
    Ok((key, record))
}

/// `Ep: #1701 | Matches: 9 | Workers: yes`
pub fn describe(record: &EventRecord) -> String {
    format!(
        "Ep: {} | Matches: {} | Workers: {}",
        record.number_of_episode,
        record.matches.len(),
        if record.has_roster() { "yes" } else { "no" }
    )
}
