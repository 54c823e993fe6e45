// src/core/html.rs
// Small helpers over `scraper` element handles.

use scraper::{ElementRef, Selector};
use url::Url;

use super::sanitize::normalize_ws;

/// All text below `el`, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Raw (not collapsed) text below `el`.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// `href` of an anchor, trimmed; `None` when missing or blank.
pub fn href(a: ElementRef<'_>) -> Option<&str> {
    a.value()
        .attr("href")
        .map(str::trim)
        .filter(|h| !h.is_empty())
}

/// Following element siblings of `el`, in document order.
pub fn next_element_siblings<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.next_siblings().filter_map(ElementRef::wrap)
}

/// Resolve a (possibly relative) link against the site base.
pub fn resolve(base: &Url, link: &str) -> Option<String> {
    base.join(link).ok().map(String::from)
}
