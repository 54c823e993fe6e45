// src/cli.rs
use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use color_eyre::eyre::{Result, eyre};

use crate::config::options::AppOptions;
use crate::core::net::{Fetch, HttpFetcher};
use crate::error::RunError;
use crate::pacing::StopFlag;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

const EVENT_USAGE: &str = "usage: event <card-url> [original title]";
const SINGLE_EVENT_TITLE: &str = "Single event";

/// Console sink for stage progress. Lines go through the log macros.
pub struct ConsoleProgress {
    total: usize,
    noun: &'static str,
    /// Failed items are warnings (harvest pages) or errors (events).
    failures_are_errors: bool,
}

impl ConsoleProgress {
    pub fn new(noun: &'static str, failures_are_errors: bool) -> Self {
        Self { total: 0, noun, failures_are_errors }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logi!("{} {} to process", total, self.noun);
    }

    fn log(&mut self, msg: &str) {
        logi!("{msg}");
    }

    fn item_started(&mut self, index: usize, label: &str) {
        logi!("[{}/{}] Analyzing: {label}", index + 1, self.total);
    }

    fn item_done(&mut self, _index: usize, detail: &str) {
        logok!("{detail}");
    }

    fn item_failed(&mut self, _index: usize, label: &str, reason: &str) {
        if self.failures_are_errors {
            loge!("{label}: {reason}");
        } else {
            logw!("Skipping {label}: {reason}");
        }
    }
}

/// Ctrl-C sets the returned flag; the stages finish the current item and stop.
fn install_interrupt() -> Result<StopFlag> {
    let stop = StopFlag::new();
    let handler_side = stop.clone();
    ctrlc::set_handler(move || {
        if !handler_side.is_set() {
            logw!("Interrupt received, stopping after the current item");
        }
        handler_side.request();
    })?;
    Ok(stop)
}

/// `harvest` binary: listing pages into the manifest.
pub fn harvest() -> Result<()> {
    let opts = AppOptions::from_env();
    let fetcher = HttpFetcher::new(&opts.net)?;
    let stop = install_interrupt()?;
    let mut progress = ConsoleProgress::new("listing pages", false);

    let started = Instant::now();
    let summary = runner::run_harvest(&opts, &fetcher, &stop, Some(&mut progress))?;

    if summary.interrupted {
        logw!("Interrupted, manifest holds what was found so far");
    }
    logok!(
        "{} links saved to {} in {:.1?}",
        summary.entries,
        summary.manifest.display(),
        started.elapsed()
    );
    Ok(())
}

/// `details` binary: every manifest entry into the year store.
pub fn details() -> Result<()> {
    let opts = AppOptions::from_env();
    let fetcher = HttpFetcher::new(&opts.net)?;
    let stop = install_interrupt()?;
    let mut progress = ConsoleProgress::new("events", true);

    logi!("Reading manifest {}", opts.extract.manifest_path.display());
    let started = Instant::now();
    let summary = match runner::run_details(&opts, &fetcher, &stop, Some(&mut progress)) {
        Ok(s) => s,
        // nothing to do without a manifest; report it and exit cleanly
        Err(RunError::Manifest(e)) => {
            loge!("Cannot read manifest: {e}");
            print!("{}", render_summary(&RunSummary::default()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if summary.interrupted {
        logw!("Interrupted after {} of the planned events", summary.attempted);
    }
    print!("{}", render_summary(&summary));
    logok!(
        "{} saved, {} failed, files in {} ({:.1?})",
        summary.saved,
        summary.failed,
        opts.store.dir.display(),
        started.elapsed()
    );
    Ok(())
}

/// `event` binary: one card page by URL.
pub fn event() -> Result<()> {
    let mut args = env::args().skip(1);
    let url = match args.next() {
        Some(a) if a == "-h" || a == "--help" => {
            eprintln!("{EVENT_USAGE}");
            return Ok(());
        }
        Some(a) => a,
        None => return Err(eyre!(EVENT_USAGE)),
    };
    let title = match args.collect::<Vec<_>>().join(" ") {
        t if t.trim().is_empty() => s!(SINGLE_EVENT_TITLE),
        t => t,
    };

    let opts = AppOptions::from_env();
    let fetcher = HttpFetcher::new(&opts.net)?;
    file_event(&opts, &fetcher, &url, &title)?;
    Ok(())
}

/// Extract one card page into the store and report it. A failed fetch,
/// parse or save is logged and yields `None`; only setup errors propagate.
fn file_event(opts: &AppOptions, fetcher: &dyn Fetch, url: &str, title: &str) -> Result<Option<String>> {
    let (key, record) = match runner::run_single(opts, fetcher, url, title) {
        Ok(saved) => saved,
        Err(RunError::Extraction(e)) => {
            loge!("Could not extract {url}: {e}");
            return Ok(None);
        }
        Err(RunError::Store(e)) => {
            loge!("Could not save {url}: {e}");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    logi!(
        "{} ({})",
        record.info("Name of the event").filter(|n| !n.is_empty()).unwrap_or(record.original_title.as_str()),
        record.date().unwrap_or("no date")
    );
    logok!("{} | Year: {key}", runner::describe(&record));
    logi!("Saved to {}", opts.store.dir.display());
    Ok(Some(key))
}

/// Per-year table printed at the end of the details stage.
pub fn render_summary(summary: &RunSummary) -> String {
    render_partitions(&summary.per_partition)
}

fn render_partitions(per_partition: &BTreeMap<String, usize>) -> String {
    if per_partition.is_empty() {
        return s!("No events saved\n");
    }
    let width = per_partition.keys().map(String::len).max().unwrap_or(0).max("Total".len());
    let mut out = format!("{:<width$}  Events\n", "Year");
    for (key, count) in per_partition {
        out.push_str(&format!("{key:<width$}  {count:>6}\n"));
    }
    let total: usize = per_partition.values().sum();
    out.push_str(&format!("{:<width$}  {total:>6}\n", "Total"));
    out
}
