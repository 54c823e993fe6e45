// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub harvest: HarvestOptions,
    pub extract: ExtractOptions,
    pub store: StoreOptions,
    pub net: NetOptions,
}

/// How the harvested manifest is ordered before it is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ManifestOrder {
    /// Newest calendar date first.
    #[default]
    Chronological,
    /// Descending string sort on `DD.MM.YYYY` (day-of-month first).
    Lexical,
}

impl FromStr for ManifestOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chronological" | "date" => Ok(ManifestOrder::Chronological),
            "lexical" | "string" => Ok(ManifestOrder::Lexical),
            other => Err(format!("unknown manifest order: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Links on listing pages are resolved against this.
    pub base_url: String,
    /// Listing endpoint; `{offset}` is substituted per page.
    pub listing_url: String,
    /// Offset stride. 0 fetches the single page at offset 0.
    pub page_step: usize,
    pub max_offset: usize,
    pub page_delay: Duration,
    pub order: ManifestOrder,
    pub manifest_path: PathBuf,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            listing_url: s!(LISTING_URL),
            page_step: PAGE_STEP,
            max_offset: MAX_OFFSET,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            order: ManifestOrder::default(),
            manifest_path: PathBuf::from(MANIFEST_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub manifest_path: PathBuf,
    pub detail_delay: Duration,
    /// Only the first N manifest entries; `None` = all.
    pub limit: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(MANIFEST_FILE),
            detail_delay: Duration::from_millis(DETAIL_DELAY_MS),
            limit: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub file_prefix: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_prefix: s!(FILE_PREFIX),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

impl AppOptions {
    /// Defaults overridden by `CAGEMATCH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns per variable name.
    /// Values that do not parse are reported and skipped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get("CAGEMATCH_LISTING_URL") {
            opts.harvest.listing_url = v;
        }
        if let Some(v) = parse_var::<usize>("CAGEMATCH_PAGE_STEP", get("CAGEMATCH_PAGE_STEP")) {
            opts.harvest.page_step = v;
        }
        if let Some(v) = parse_var::<usize>("CAGEMATCH_MAX_OFFSET", get("CAGEMATCH_MAX_OFFSET")) {
            opts.harvest.max_offset = v;
        }
        if let Some(ms) = parse_var::<u64>("CAGEMATCH_PAGE_DELAY_MS", get("CAGEMATCH_PAGE_DELAY_MS")) {
            opts.harvest.page_delay = Duration::from_millis(ms);
        }
        if let Some(order) = parse_var::<ManifestOrder>("CAGEMATCH_ORDER", get("CAGEMATCH_ORDER")) {
            opts.harvest.order = order;
        }
        if let Some(v) = get("CAGEMATCH_MANIFEST") {
            opts.harvest.manifest_path = PathBuf::from(&v);
            opts.extract.manifest_path = PathBuf::from(v);
        }
        if let Some(ms) = parse_var::<u64>("CAGEMATCH_DETAIL_DELAY_MS", get("CAGEMATCH_DETAIL_DELAY_MS")) {
            opts.extract.detail_delay = Duration::from_millis(ms);
        }
        if let Some(n) = parse_var::<usize>("CAGEMATCH_LIMIT", get("CAGEMATCH_LIMIT")) {
            opts.extract.limit = (n > 0).then_some(n);
        }
        if let Some(v) = get("CAGEMATCH_OUT_DIR") {
            opts.store.dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("CAGEMATCH_FILE_PREFIX") {
            // an explicitly empty prefix is allowed
            opts.store.file_prefix = v.trim().to_string();
        }
        if let Some(v) = get("CAGEMATCH_USER_AGENT") {
            opts.net.user_agent = v;
        }
        if let Some(secs) = parse_var::<u64>("CAGEMATCH_TIMEOUT_SECS", get("CAGEMATCH_TIMEOUT_SECS")) {
            opts.net.timeout = Duration::from_secs(secs);
        }
        opts
    }
}

fn parse_var<T>(key: &str, raw: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            logw!("Ignoring {key}={raw:?}: {e}");
            None
        }
    }
}
