// src/extract.rs
use std::time::Instant;

use crate::core::net::Fetch;
use crate::error::ExtractionFailure;
use crate::model::EventRecord;
use crate::specs::event::parse_event;

/// Fetch one card page and turn it into a record.
/// Only a failed fetch or an empty body fails; absent page structure just leaves defaults.
pub fn extract(
    fetcher: &dyn Fetch,
    url: &str,
    original_title: &str,
) -> Result<EventRecord, ExtractionFailure> {
    let doc = fetcher.get(url)?;
    if doc.trim().is_empty() {
        return Err(ExtractionFailure::Parse { url: s!(url), reason: s!("empty document") });
    }

    let t = Instant::now();
    let record = parse_event(&doc, url, original_title);
    logd!("Event: parsed {url} in {:?}", t.elapsed());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    struct OnePage(&'static str);

    impl Fetch for OnePage {
        fn get(&self, url: &str) -> Result<String, FetchError> {
            match self.0 {
                "404" => Err(FetchError::Status { url: s!(url), status: 404 }),
                body => Ok(s!(body)),
            }
        }
    }

    const URL: &str = "https://www.cagematch.net/?id=1&nr=1&page=2";

    #[test]
    fn blank_body_is_a_parse_failure() {
        let err = extract(&OnePage(" \n "), URL, "t").unwrap_err();
        assert!(matches!(err, ExtractionFailure::Parse { .. }));
        assert_eq!(err.url(), Some(URL));
    }

    #[test]
    fn http_error_carries_the_url() {
        let err = extract(&OnePage("404"), URL, "t").unwrap_err();
        assert!(matches!(err, ExtractionFailure::Fetch(FetchError::Status { status: 404, .. })));
        assert_eq!(err.url(), Some(URL));
    }

    #[test]
    fn page_without_structure_still_yields_a_record() {
        let r = extract(&OnePage("<html><body>maintenance</body></html>"), URL, "NJPW #12").unwrap();
        assert_eq!(r.url, URL);
        assert_eq!(r.number_of_episode, "#12");
        assert!(r.matches.is_empty());
    }
}
