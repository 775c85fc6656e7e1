//! Section scanning: heading-delimited blocks with a term accumulator.

use crate::dates;
use crate::extract::element_text;
use crate::model::ScrapedDate;
use scraper::{ElementRef, Html, Selector};

/// Section-like containers worth scanning.
const CONTAINER_SELECTOR: &str = "section, article, .content, .main, main";

/// Headings that delimit a block and may carry a term label.
const HEADING_SELECTOR: &str = "h2, h3, h4";

/// How many sibling elements to scan after each heading.
const MAX_SIBLING_SCAN: usize = 10;

/// Scan heading-delimited sections for dates embedded in prose.
///
/// Each heading may set the ambient term ("Winter 2025"), which persists
/// across later headings in the same container until overwritten — it is
/// never reset. After each heading, up to [`MAX_SIBLING_SCAN`] following
/// sibling elements are scanned; the walk stops early at the next heading so
/// a block's dates are not attributed to the wrong term.
pub fn extract(document: &Html, source_url: &str) -> Vec<ScrapedDate> {
    let container_sel = Selector::parse(CONTAINER_SELECTOR).expect("container selector is valid");
    let heading_sel = Selector::parse(HEADING_SELECTOR).expect("heading selector is valid");

    let mut out = Vec::new();

    for container in document.select(&container_sel) {
        let mut current_term: Option<String> = None;

        for heading in container.select(&heading_sel) {
            let heading_text = element_text(&heading);
            if let Some(term) = dates::extract_term(&heading_text) {
                current_term = Some(term);
            }

            let mut walked = 0usize;
            for node in heading.next_siblings() {
                let Some(sibling) = ElementRef::wrap(node) else {
                    continue;
                };
                if matches!(sibling.value().name(), "h2" | "h3" | "h4") {
                    break;
                }
                if walked == MAX_SIBLING_SCAN {
                    break;
                }
                walked += 1;

                let text = element_text(&sibling);
                for raw in dates::extract_dates_from_text(&text) {
                    if let Some(date) = dates::parse(&raw) {
                        let event = dates::event_text(&text, &raw);
                        out.push(ScrapedDate::new(
                            event,
                            date,
                            current_term.clone(),
                            source_url,
                        ));
                    }
                }
            }
        }
    }

    out
}
