// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.cagematch.net";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const TIMEOUT_SECS: u64 = 15;

// Listing (NJPW pay-per-views). `{offset}` is replaced per page.
pub const LISTING_URL: &str = "https://www.cagematch.net/en/?id=8&nr=7&page=4\
    &showtype=Pay+Per+View%7CPremium+Live+Event&s={offset}";
pub const OFFSET_PLACEHOLDER: &str = "{offset}";
pub const PAGE_STEP: usize = 100;
pub const MAX_OFFSET: usize = 1500;

// Pacing, be polite
pub const PAGE_DELAY_MS: u64 = 500;
pub const DETAIL_DELAY_MS: u64 = 3_000;

// Files
pub const MANIFEST_FILE: &str = "njpw_all_ppv_cards_links.json";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_PREFIX: &str = "njpw_ppv_cagematch_";

// Records
pub const NOT_AVAILABLE: &str = "not available";
pub const DEFAULT_MATCH_TYPE: &str = "Match";
pub const UNKNOWN_PARTITION: &str = "unknown";
pub const SEEDED_INFO_KEYS: [&str; 6] =
    ["Name of the event", "Date", "Promotion", "Type", "Location", "Arena"];
