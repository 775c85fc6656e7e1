//! The heuristic scrape pipeline: tables, sections, lists, dedup.
//!
//! Three independent strategies with the uniform shape
//! `(document, source_url) -> Vec<ScrapedDate>` run in a fixed order and
//! their concatenated output is deduplicated. The order matters: dedup keeps
//! the first occurrence of an (event, date) pair, so table results win over
//! section results, which win over list results.
//!
//! All entry points are **synchronous** because the `scraper` crate's types
//! are `!Send` — callers integrating with the async runtime should wrap in
//! `tokio::task::spawn_blocking`.

pub mod dedup;
pub mod list;
pub mod section;
pub mod table;

use crate::model::ScrapedDate;
use scraper::{ElementRef, Html};

/// Run the full pipeline over raw HTML.
///
/// Worst case is an empty list; nothing in the pipeline errors on malformed
/// input.
pub fn scrape_page(html: &str, source_url: &str) -> Vec<ScrapedDate> {
    let document = Html::parse_document(html);

    let mut results = table::extract(&document, source_url);
    results.extend(section::extract(&document, source_url));
    results.extend(list::extract(&document, source_url));

    let candidates = results.len();
    let unique = dedup::dedupe(results);
    tracing::debug!(
        "scraped {} candidates ({} unique) from {}",
        candidates,
        unique.len(),
        source_url
    );
    unique
}

/// Visible text of an element with whitespace runs collapsed to single
/// spaces, the form the date and term scanners expect.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventCategory;

    #[test]
    fn test_pipeline_runs_all_extractors() {
        let html = r#"
        <html><body>
        <table>
            <tr><th>Date</th><th>Event</th></tr>
            <tr><td>January 15, 2025</td><td>Add/Drop Deadline</td></tr>
        </table>
        <section>
            <h2>Winter 2025</h2>
            <p>Reading week begins February 17, 2025</p>
        </section>
        <div>Winter 2025 Key Dates
            <ul><li>Classes end April 4, 2025</li></ul>
        </div>
        </body></html>
        "#;

        let dates = scrape_page(html, "https://example.edu/dates");
        assert_eq!(dates.len(), 3);
        assert!(dates.iter().all(|d| d.source_url == "https://example.edu/dates"));
        assert_eq!(dates[0].event, "Add/Drop Deadline");
        assert_eq!(dates[1].event, "Reading week begins");
        assert_eq!(dates[2].event, "Classes end");
    }

    #[test]
    fn test_pipeline_dedup_earlier_extractor_wins() {
        // The same (event, date) pair appears in a table and in a term-scoped
        // list. The table emits first, so its record (without a term) is the
        // one kept; the list duplicate's term is dropped with it.
        let html = r#"
        <html><body>
        <table>
            <tr><th>Date</th><th>Event</th></tr>
            <tr><td>April 4, 2025</td><td>Classes end</td></tr>
        </table>
        <div>Winter 2025 schedule
            <ul><li>Classes end April 4, 2025</li></ul>
        </div>
        </body></html>
        "#;

        let dates = scrape_page(html, "https://example.edu/dates");
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].event, "Classes end");
        assert_eq!(dates[0].term, None);
        assert_eq!(dates[0].category, EventCategory::Academic);
    }

    #[test]
    fn test_pipeline_empty_document() {
        assert!(scrape_page("<html><body></body></html>", "https://example.edu").is_empty());
        assert!(scrape_page("", "https://example.edu").is_empty());
    }
}
