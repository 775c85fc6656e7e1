//! Collapse repeated (event, date) candidates across extractors.

use crate::model::ScrapedDate;
use std::collections::HashSet;

/// Key separator; U+001F never survives the whitespace-collapsing text
/// extraction, so it cannot appear in either field.
const KEY_SEP: char = '\u{1f}';

/// Single forward pass keeping the first occurrence of each (event, date)
/// pair. Later duplicates are dropped whole — their term, category, and
/// deadline flag go with them.
pub fn dedupe(candidates: Vec<ScrapedDate>) -> Vec<ScrapedDate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let key = format!("{}{KEY_SEP}{}", candidate.event, candidate.date.to_rfc3339());
        if seen.insert(key) {
            unique.push(candidate);
        }
    }

    unique
}
