//! Regex-based date recognition over free text.
//!
//! `parse` tries four pattern families in a fixed order and falls back to a
//! whole-string attempt; `extract_dates_from_text` scans prose with the
//! textual month-first family only. The asymmetry is deliberate: table cells
//! go through `parse` directly and benefit from all four families, while
//! section and list prose is only searched for the "Month D[, YYYY]" form.
//! Broadening the prose scan would change result counts against previously
//! stored data, so it stays narrow.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;

/// Textual month-first form: "January 15, 2025", "Sept. 15 2025", "Jan 5".
/// The year is optional; a match without one resolves to the current year,
/// which is how bare "Jan 5" entries on term-scoped pages stay usable.
const MONTH_FIRST: &str =
    r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:,?\s+(\d{4}))?\b";

/// Textual day-first form: "15 January 2025".
const DAY_FIRST: &str =
    r"(?i)\b(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})\b";

/// Numeric month-first form: "01/15/2025" or "1-15-2025".
const NUMERIC: &str = r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b";

/// ISO-like form: "2025-01-15" or "2025/1/15".
const ISO_LIKE: &str = r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b";

/// Formats tried against the whole trimmed input when no pattern family
/// matched, catching renderings the families do not cover.
const WHOLE_TEXT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
];

/// Try to find a calendar date anywhere in `text`.
///
/// Each family is matched independently; a match that turns out not to be a
/// valid calendar date (e.g. "02/30/2025") falls through to the next family
/// rather than failing the whole parse. Returns `None` when nothing in the
/// input reads as a date.
pub fn parse(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let month_first = Regex::new(MONTH_FIRST).expect("month-first regex is valid");
    if let Some(cap) = month_first.captures(text) {
        let month = month_number(&cap[1]);
        let day = cap[2].parse::<u32>().ok();
        let year = cap
            .get(3)
            .and_then(|y| y.as_str().parse::<i32>().ok())
            .unwrap_or_else(|| Utc::now().year());
        if let (Some(m), Some(d)) = (month, day) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, m, d) {
                return Some(date);
            }
        }
    }

    let day_first = Regex::new(DAY_FIRST).expect("day-first regex is valid");
    if let Some(cap) = day_first.captures(text) {
        let day = cap[1].parse::<u32>().ok();
        let month = month_number(&cap[2]);
        let year = cap[3].parse::<i32>().ok();
        if let (Some(d), Some(m), Some(y)) = (day, month, year) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                return Some(date);
            }
        }
    }

    let numeric = Regex::new(NUMERIC).expect("numeric regex is valid");
    if let Some(cap) = numeric.captures(text) {
        // US convention, month first, matching the host parser the original
        // data was produced with.
        let month = cap[1].parse::<u32>().ok();
        let day = cap[2].parse::<u32>().ok();
        let year = cap[3].parse::<i32>().ok();
        if let (Some(m), Some(d), Some(y)) = (month, day, year) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                return Some(date);
            }
        }
    }

    let iso_like = Regex::new(ISO_LIKE).expect("iso regex is valid");
    if let Some(cap) = iso_like.captures(text) {
        let year = cap[1].parse::<i32>().ok();
        let month = cap[2].parse::<u32>().ok();
        let day = cap[3].parse::<u32>().ok();
        if let (Some(y), Some(m), Some(d)) = (year, month, day) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                return Some(date);
            }
        }
    }

    parse_whole(text)
}

/// Last-resort attempt: parse the entire trimmed input as a date.
fn parse_whole(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    WHOLE_TEXT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// All non-overlapping textual month-first date substrings in `text`, in
/// document order. Repeated literal substrings are kept.
pub fn extract_dates_from_text(text: &str) -> Vec<String> {
    let month_first = Regex::new(MONTH_FIRST).expect("month-first regex is valid");
    month_first
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// First academic term label in `text` ("Winter 2025" etc.), verbatim as it
/// appears on the page. The year must start with "20".
pub fn extract_term(text: &str) -> Option<String> {
    let term = Regex::new(r"(?i)\b(winter|spring|summer|fall|autumn)\s+20\d{2}\b")
        .expect("term regex is valid");
    term.find(text).map(|m| m.as_str().to_string())
}

/// Map a month word (full name or any prefix-abbreviation) to 1..=12.
fn month_number(word: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let lower = word.to_lowercase();
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_first_and_day_first_agree() {
        let a = parse("January 15, 2025").unwrap();
        let b = parse("15 January 2025").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_abbreviated_month_with_period() {
        assert_eq!(
            parse("Sept. 2, 2025"),
            NaiveDate::from_ymd_opt(2025, 9, 2)
        );
    }

    #[test]
    fn test_parse_numeric_is_month_first() {
        assert_eq!(parse("01/15/2025"), NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(parse("1-15-2025"), NaiveDate::from_ymd_opt(2025, 1, 15));
    }

    #[test]
    fn test_parse_iso_like() {
        assert_eq!(parse("2025-01-15"), NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(parse("2025/1/5"), NaiveDate::from_ymd_opt(2025, 1, 5));
    }

    #[test]
    fn test_parse_invalid_calendar_date_is_none() {
        // Feb 30 matches the numeric family but is not a real date; the
        // parse must fail soft, not panic.
        assert_eq!(parse("02/30/2025"), None);
    }

    #[test]
    fn test_parse_embedded_in_prose() {
        assert_eq!(
            parse("Classes begin January 6, 2025 for all faculties"),
            NaiveDate::from_ymd_opt(2025, 1, 6)
        );
    }

    #[test]
    fn test_parse_yearless_defaults_to_current_year() {
        let expected = NaiveDate::from_ymd_opt(Utc::now().year(), 1, 5).unwrap();
        assert_eq!(parse("Jan 5"), Some(expected));
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse("no dates here"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_extract_dates_in_document_order_with_duplicates() {
        let text = "Add/drop closes January 15, 2025. Exams start April 10, 2025. \
                    Grades due January 15, 2025.";
        let found = extract_dates_from_text(text);
        assert_eq!(
            found,
            vec!["January 15, 2025", "April 10, 2025", "January 15, 2025"]
        );
    }

    #[test]
    fn test_extract_dates_ignores_numeric_and_iso_forms() {
        // Prose scanning is month-first textual only; numeric dates embedded
        // in prose are found by parse() but not by the bulk extractor.
        assert!(extract_dates_from_text("due on 01/15/2025 or 2025-04-10").is_empty());
    }

    #[test]
    fn test_extract_dates_yearless() {
        assert_eq!(extract_dates_from_text("Jan 5 - Classes begin"), vec!["Jan 5"]);
    }

    #[test]
    fn test_extract_term_verbatim() {
        assert_eq!(
            extract_term("Key dates for Winter 2025 term"),
            Some("Winter 2025".to_string())
        );
        // Original casing of the matched span is preserved.
        assert_eq!(
            extract_term("key dates for wInTeR 2025"),
            Some("wInTeR 2025".to_string())
        );
    }

    #[test]
    fn test_extract_term_requires_modern_year() {
        assert_eq!(extract_term("Fall 1999 archive"), None);
        assert_eq!(extract_term("nothing seasonal"), None);
    }

    #[test]
    fn test_month_number_prefixes() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("sept"), Some(9));
        assert_eq!(month_number("DEC"), Some(12));
        assert_eq!(month_number("foo"), None);
    }
}
