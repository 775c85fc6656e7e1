//! List scanning: `<ul>`/`<ol>` items with term inherited from the parent.

use crate::dates;
use crate::extract::element_text;
use crate::model::ScrapedDate;
use scraper::{ElementRef, Html, Selector};

/// Candidates with a shorter cleaned event text are discarded. The other
/// extractors carry no such gate; the asymmetry is preserved as-is.
const MIN_EVENT_CHARS: usize = 3;

/// Scan list items for embedded dates.
///
/// One term is derived for the whole list from its parent element's full
/// text, not per item, so "Winter 2025 Key Dates" above a list tags every
/// item in it.
pub fn extract(document: &Html, source_url: &str) -> Vec<ScrapedDate> {
    let list_sel = Selector::parse("ul, ol").expect("list selector is valid");
    let item_sel = Selector::parse("li").expect("item selector is valid");

    let mut out = Vec::new();

    for list in document.select(&list_sel) {
        let term = list
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| element_text(&parent))
            .and_then(|text| dates::extract_term(&text));

        for item in list.select(&item_sel) {
            let text = element_text(&item);
            for raw in dates::extract_dates_from_text(&text) {
                if let Some(date) = dates::parse(&raw) {
                    let event = dates::event_text(&text, &raw);
                    if event.chars().count() < MIN_EVENT_CHARS {
                        continue;
                    }
                    out.push(ScrapedDate::new(event, date, term.clone(), source_url));
                }
            }
        }
    }

    out
}
