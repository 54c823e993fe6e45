// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::NOT_AVAILABLE;

static EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("episode pattern"));
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.(\d{4})").expect("year pattern"));

/// Collapse every whitespace run (NBSP, tabs and newlines included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Info-box label: normalized, trailing colon(s) dropped.
pub fn clean_label(s: &str) -> String {
    normalize_ws(s).trim_end_matches(':').trim_end().to_string()
}

/// `DD.MM.YYYY` by shape only: 10 chars, dots at 2 and 5. "99.99.0000" passes.
pub fn has_date_shape(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.len() == 10 && chars[2] == '.' && chars[5] == '.'
}

/// First `#<digits>` in a listing title, e.g. "NJPW #1701" -> "#1701".
pub fn episode_number(title: &str) -> String {
    EPISODE_RE
        .find(title)
        .map(|m| s!(m.as_str()))
        .unwrap_or_else(|| s!(NOT_AVAILABLE))
}

/// Year of the first `DD.MM.YYYY` found anywhere in `date`.
pub fn year_of(date: &str) -> Option<&str> {
    YEAR_RE
        .captures(date)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
