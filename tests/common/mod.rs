// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use cagematch_scrape::config::options::AppOptions;
use cagematch_scrape::core::Fetch;
use cagematch_scrape::error::FetchError;
use cagematch_scrape::pacing::StopFlag;

/// Canned pages by URL. Anything else answers 404.
#[derive(Default)]
pub struct StubFetch {
    pages: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
    /// Request a stop once this many GETs have been served.
    stop_after: Option<(usize, StopFlag)>,
}

impl StubFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn stop_after(mut self, n: usize, stop: &StopFlag) -> Self {
        self.stop_after = Some((n, stop.clone()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for StubFetch {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        if let Some((n, stop)) = &self.stop_after {
            if self.calls.borrow().len() >= *n {
                stop.request();
            }
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

/// Options pointing every file into `dir`, with no pauses.
pub fn test_options(dir: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.harvest.page_delay = Duration::ZERO;
    opts.harvest.manifest_path = dir.join("manifest.json");
    opts.extract.detail_delay = Duration::ZERO;
    opts.extract.manifest_path = dir.join("manifest.json");
    opts.store.dir = dir.join("out");
    opts.store.file_prefix = "njpw_ppv_cagematch_".to_string();
    opts
}

/// A listing table holding one row per `(date, title, card href)`.
pub fn listing_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from(
        "<html><body><table class=\"TBase\">\
         <tr><th>#</th><th>Date</th><th>Promotion</th><th>Event</th><th>Location</th><th>Card</th></tr>",
    );
    for (i, (date, title, card)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{n}</td><td>{date}</td><td><a href=\"?id=8&amp;nr=7\">NJPW</a></td>\
             <td><a href=\"?id=1&amp;nr={n}\">{title}</a></td><td>Tokyo</td>\
             <td><a href=\"{card}\">Card</a></td></tr>",
            n = i + 1,
        ));
    }
    body.push_str("</table></body></html>");
    body
}

/// A card page with a date, `matches` bouts and an optional roster.
pub fn card_page(name: &str, date: &str, matches: usize, roster: Option<&str>) -> String {
    let mut body = format!(
        "<html><body>\
         <div class=\"InformationBoxTitle\">Name of the event:</div>\
         <div class=\"InformationBoxContents\">{name}</div>\
         <div class=\"InformationBoxTitle\">Date:</div>\
         <div class=\"InformationBoxContents\">{date}</div>\
         <div class=\"InformationBoxTitle\">Arena:</div>\
         <div class=\"InformationBoxContents\">Tokyo Dome</div>"
    );
    for i in 0..matches {
        body.push_str(&format!(
            "<div class=\"Match\"><div class=\"MatchType\">Singles Match</div>\
             <div class=\"MatchResults\">Wrestler {i} defeats Wrestler {}</div></div>",
            i + 100
        ));
    }
    if let Some(r) = roster {
        body.push_str(&format!("<div class=\"Caption\">All workers</div><div class=\"Comments\">{r}</div>"));
    }
    body.push_str("</body></html>");
    body
}
