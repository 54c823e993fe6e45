// src/specs/listing.rs
//! Listing *spec*: event rows of a promotion's event table.
//!
//! A row counts as an event when it has at least six cells, cell 1 holds a
//! `DD.MM.YYYY`-shaped date, cell 3 an anchor naming the event, and cell 5 an
//! anchor whose text contains `Card`. The card link is what gets harvested.

use scraper::{ElementRef, Html};
use url::Url;

use crate::core::html::{first, href, raw_text, resolve, text_of};
use crate::core::sanitize::has_date_shape;
use crate::model::LinkEntry;

const DATE_CELL: usize = 1;
const EVENT_CELL: usize = 3;
const CARD_CELL: usize = 5;
const MIN_CELLS: usize = 6;

/// Every qualifying row of `doc`, in document order. Duplicates are kept.
pub fn parse_listing(doc: &str, base: &Url) -> Vec<LinkEntry> {
    let html = Html::parse_document(doc);
    html.select(selector!("tr"))
        .filter_map(|row| parse_row(row, base))
        .collect()
}

/// One `<tr>`; `None` when it is not an event row.
pub fn parse_row(row: ElementRef<'_>, base: &Url) -> Option<LinkEntry> {
    let cells: Vec<ElementRef> = row.select(selector!("td")).collect();
    if cells.len() < MIN_CELLS {
        return None;
    }

    // shape is checked on the trimmed cell text, inner spacing untouched
    let date = raw_text(cells[DATE_CELL]).trim().to_string();
    if !has_date_shape(&date) {
        return None;
    }

    // the event anchor only supplies the title; its href is not needed
    let event_a = first(cells[EVENT_CELL], selector!("a"))?;
    let title = match text_of(event_a) {
        t if t.is_empty() => event_a.value().attr("title").map(str::trim).unwrap_or("").to_string(),
        t => t,
    };

    // Only the first anchor of the card cell is considered.
    let card_a = first(cells[CARD_CELL], selector!("a"))?;
    if !raw_text(card_a).contains("Card") {
        return None;
    }
    let link = resolve(base, href(card_a)?)?;

    Some(LinkEntry { title, link, date })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.cagematch.net").unwrap()
    }

    fn table(rows: &str) -> String {
        format!("<html><body><table class=\"TBase\">{rows}</table></body></html>")
    }

    #[test]
    fn scenario_row_becomes_entry() {
        let doc = table(
            r#"<tr><td></td><td>05.01.2023</td><td></td>
               <td><a href="/x">Event A</a></td><td></td>
               <td><a href="/y">Card</a></td></tr>"#,
        );
        let rows = parse_listing(&doc, &base());
        assert_eq!(
            rows,
            vec![LinkEntry {
                title: s!("Event A"),
                link: s!("https://www.cagematch.net/y"),
                date: s!("05.01.2023"),
            }]
        );
    }

    #[test]
    fn title_attribute_used_when_anchor_text_is_empty() {
        let doc = table(
            r#"<tr><td></td><td>05.01.2023</td><td></td>
               <td><a href="/x" title="Event A"></a></td><td></td>
               <td><a href="/y">Card</a></td></tr>"#,
        );
        let rows = parse_listing(&doc, &base());
        assert_eq!(rows[0].title, "Event A");
    }

    #[test]
    fn realistic_row_with_extra_cells() {
        let doc = table(
            r#"<tr class="TRow1">
                 <td class="TCol AlignCenter TextLowlight">1</td>
                 <td class="TCol TColSeparator">04.01.2024</td>
                 <td class="TCol TColSeparator"><a href="?id=8&amp;nr=7"><img src="/img/njpw.gif" alt="NJPW"></a></td>
                 <td class="TCol TColSeparator"><a href="?id=1&amp;nr=380001">NJPW Wrestle Kingdom 18</a></td>
                 <td class="TCol TColSeparator">Tokyo Dome</td>
                 <td class="TCol TColSeparator"><a href="?id=1&amp;nr=380001&amp;page=2">Card</a></td>
                 <td class="TCol TColSeparator">9.10</td>
               </tr>"#,
        );
        let rows = parse_listing(&doc, &base());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "NJPW Wrestle Kingdom 18");
        assert_eq!(rows[0].link, "https://www.cagematch.net/?id=1&nr=380001&page=2");
        assert_eq!(rows[0].date, "04.01.2024");
    }

    #[test]
    fn rows_failing_any_rule_are_skipped() {
        let doc = table(concat!(
            // header row: <th>, no cells
            r#"<tr><th>#</th><th>Date</th><th>Promotion</th><th>Event</th><th>Location</th><th>Card</th></tr>"#,
            // five cells
            r#"<tr><td></td><td>05.01.2023</td><td></td><td><a href="/x">A</a></td><td><a href="/y">Card</a></td></tr>"#,
            // date wrong shape
            r#"<tr><td></td><td>5.1.2023</td><td></td><td><a href="/x">B</a></td><td></td><td><a href="/y">Card</a></td></tr>"#,
            // no event anchor
            r#"<tr><td></td><td>05.01.2023</td><td></td><td>C</td><td></td><td><a href="/y">Card</a></td></tr>"#,
            // card anchor text lacks "Card" (case-sensitive)
            r#"<tr><td></td><td>05.01.2023</td><td></td><td><a href="/x">D</a></td><td></td><td><a href="/y">card</a></td></tr>"#,
            // no card anchor at all
            r#"<tr><td></td><td>05.01.2023</td><td></td><td><a href="/x">E</a></td><td></td><td>Card</td></tr>"#,
            // passes
            r#"<tr><td></td><td>99.99.2023</td><td></td><td><a href="/x">F</a></td><td></td><td><a href="/f">Full Card</a></td></tr>"#,
        ));
        let rows = parse_listing(&doc, &base());
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["F"]);
    }

    #[test]
    fn event_anchor_without_href_still_qualifies() {
        let doc = table(
            r#"<tr><td></td><td>05.01.2023</td><td></td>
               <td><a title="Event A">Event A</a></td><td></td>
               <td><a href="/y">Card</a></td></tr>"#,
        );
        let rows = parse_listing(&doc, &base());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Event A");
        assert_eq!(rows[0].link, "https://www.cagematch.net/y");
    }

    #[test]
    fn date_shape_uses_trimmed_text_not_collapsed_text() {
        let doc = table(concat!(
            r#"<tr><td></td><td>05.0  .2023</td><td></td><td><a href="/x">Spaced</a></td><td></td><td><a href="/y">Card</a></td></tr>"#,
            r#"<tr><td></td><td>  05.01.2023 </td><td></td><td><a href="/x">Padded</a></td><td></td><td><a href="/z">Card</a></td></tr>"#,
        ));
        let rows = parse_listing(&doc, &base());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Padded");
        assert_eq!(rows[0].date, "05.01.2023");
    }

    #[test]
    fn duplicates_survive_parsing() {
        let row = r#"<tr><td></td><td>05.01.2023</td><td></td><td><a href="/x">A</a></td><td></td><td><a href="/y">Card</a></td></tr>"#;
        let doc = table(&format!("{row}{row}"));
        assert_eq!(parse_listing(&doc, &base()).len(), 2);
    }
}
