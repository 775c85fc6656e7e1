//! Table scanning: header-driven column extraction with per-cell fallback.

use crate::dates;
use crate::extract::element_text;
use crate::model::ScrapedDate;
use scraper::{ElementRef, Html, Selector};

/// Header keywords naming the date column.
const DATE_HEADERS: &[&str] = &["date", "when"];

/// Header keywords naming the event column.
const EVENT_HEADERS: &[&str] = &["event", "description", "item", "what"];

/// Scan every `<table>` for date-bearing rows.
///
/// When a header row names both a date column and an event column, rows are
/// read positionally. Otherwise every cell is probed as a date and the
/// adjacent cell supplies the event text, which may emit more than one
/// record per row.
pub fn extract(document: &Html, source_url: &str) -> Vec<ScrapedDate> {
    let table_sel = Selector::parse("table").expect("table selector is valid");
    let row_sel = Selector::parse("tr").expect("row selector is valid");
    let th_sel = Selector::parse("th").expect("th selector is valid");
    let cell_sel = Selector::parse("th, td").expect("cell selector is valid");

    let mut out = Vec::new();

    for table in document.select(&table_sel) {
        let rows: Vec<ElementRef> = table.select(&row_sel).collect();

        // Header row: the first row containing a header cell.
        let headers: Option<Vec<String>> = rows
            .iter()
            .find(|row| row.select(&th_sel).next().is_some())
            .map(|row| {
                row.select(&cell_sel)
                    .map(|cell| element_text(&cell).to_lowercase())
                    .collect()
            });

        let date_col = headers.as_ref().and_then(|h| {
            h.iter()
                .position(|t| DATE_HEADERS.iter().any(|k| t.contains(k)))
        });
        let event_col = headers.as_ref().and_then(|h| {
            h.iter()
                .position(|t| EVENT_HEADERS.iter().any(|k| t.contains(k)))
        });

        match (date_col, event_col) {
            (Some(di), Some(ei)) => {
                for row in &rows {
                    let cells: Vec<String> =
                        row.select(&cell_sel).map(|c| element_text(&c)).collect();
                    if cells.len() < 2 {
                        continue;
                    }
                    let (Some(date_text), Some(event)) = (cells.get(di), cells.get(ei)) else {
                        continue;
                    };
                    // The header row itself falls through here; its date cell
                    // is a label and fails to parse.
                    if let Some(date) = dates::parse(date_text) {
                        out.push(ScrapedDate::new(event.clone(), date, None, source_url));
                    }
                }
            }
            _ => scan_cells(&rows, &cell_sel, source_url, &mut out),
        }
    }

    out
}

/// Fallback when no usable header was found: probe every cell as a date and
/// pair it with its neighbor.
fn scan_cells(
    rows: &[ElementRef],
    cell_sel: &Selector,
    source_url: &str,
    out: &mut Vec<ScrapedDate>,
) {
    for row in rows {
        let cells: Vec<String> = row.select(cell_sel).map(|c| element_text(&c)).collect();
        if cells.len() < 2 {
            continue;
        }
        for (i, cell) in cells.iter().enumerate() {
            if let Some(date) = dates::parse(cell) {
                let adjacent = if i == 0 { cells.get(1) } else { cells.get(i - 1) };
                let event = adjacent
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .unwrap_or("Event");
                out.push(ScrapedDate::new(event.to_string(), date, None, source_url));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventCategory;

    fn scrape(html: &str) -> Vec<ScrapedDate> {
        let document = Html::parse_document(html);
        extract(&document, "https://example.edu/dates")
    }

    #[test]
    fn test_header_driven_extraction() {
        let html = r#"
        <table>
            <tr><th>Date</th><th>Event</th></tr>
            <tr><td>January 15, 2025</td><td>Add/Drop Deadline</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 1);
        let d = &dates[0];
        assert_eq!(d.event, "Add/Drop Deadline");
        assert_eq!(d.category, EventCategory::Deadline);
        assert!(d.deadline);
        assert_eq!(d.term, None);
        assert_eq!(d.date.to_rfc3339(), "2025-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_header_synonyms() {
        let html = r#"
        <table>
            <tr><th>When</th><th>Description</th></tr>
            <tr><td>2025-04-10</td><td>Final exams begin</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].event, "Final exams begin");
        assert_eq!(dates[0].category, EventCategory::Exam);
    }

    #[test]
    fn test_columns_in_either_order() {
        let html = r#"
        <table>
            <tr><th>Event</th><th>Date</th></tr>
            <tr><td>Orientation</td><td>September 2, 2025</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].event, "Orientation");
    }

    #[test]
    fn test_fallback_uses_previous_cell() {
        let html = r#"
        <table>
            <tr><td>Orientation</td><td>September 2, 2025</td></tr>
            <tr><td>Thanksgiving</td><td>October 13, 2025</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].event, "Orientation");
        assert_eq!(dates[1].event, "Thanksgiving");
    }

    #[test]
    fn test_fallback_first_cell_date_uses_next_cell() {
        let html = r#"
        <table>
            <tr><td>September 2, 2025</td><td>Orientation</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].event, "Orientation");
    }

    #[test]
    fn test_fallback_empty_adjacent_defaults_to_event() {
        let html = r#"
        <table>
            <tr><td></td><td>September 2, 2025</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].event, "Event");
    }

    #[test]
    fn test_fallback_multiple_dates_per_row() {
        let html = r#"
        <table>
            <tr><td>Exam period</td><td>April 10, 2025</td><td>April 26, 2025</td></tr>
        </table>
        "#;

        let dates = scrape(html);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].event, "Exam period");
        // Second date-bearing cell pairs with its previous cell, which is
        // itself a date.
        assert_eq!(dates[1].event, "April 10, 2025");
    }

    #[test]
    fn test_single_cell_rows_skipped() {
        let html = r#"
        <table>
            <tr><td>January 15, 2025</td></tr>
        </table>
        "#;

        assert!(scrape(html).is_empty());
    }

    #[test]
    fn test_table_without_dates() {
        let html = r#"
        <table>
            <tr><th>Name</th><th>Office</th></tr>
            <tr><td>Registrar</td><td>Main Hall 101</td></tr>
        </table>
        "#;

        assert!(scrape(html).is_empty());
    }
}
