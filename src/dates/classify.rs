//! Keyword-table classification of event text.
//!
//! Category matching is ordered substring testing: the first category whose
//! keyword list hits wins. The order is behaviorally significant ("Final
//! Exam Deadline" is a deadline, not an exam) and replicates the fixed check
//! order the stored data was produced with. The deadline flag uses its own
//! keyword list — it includes "final day", which the category table does not
//! — and the two lists must stay separate.

use crate::model::EventCategory;

/// Category keyword table, tested in this exact order.
const CATEGORY_KEYWORDS: &[(EventCategory, &[&str])] = &[
    (EventCategory::Registration, &["registration", "enrol", "enroll"]),
    (EventCategory::Deadline, &["deadline", "due", "last day"]),
    (EventCategory::Exam, &["exam", "final", "test"]),
    (EventCategory::Academic, &["term", "semester", "class"]),
    (EventCategory::Closure, &["holiday", "closure", "closed"]),
];

/// Keywords that mark an event as a deadline, independent of its category.
const DEADLINE_KEYWORDS: &[&str] = &["deadline", "due", "last day", "final day"];

/// Classify event text into a coarse category. First matching category in
/// table order wins; unmatched text is [`EventCategory::Other`].
pub fn categorize(event_text: &str) -> EventCategory {
    let text = event_text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }
    EventCategory::Other
}

/// Whether the event text reads as a deadline.
pub fn is_deadline(event_text: &str) -> bool {
    let text = event_text.to_lowercase();
    DEADLINE_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Derive an event description from the text a date was found in.
///
/// Removes the first literal occurrence of the matched date substring, strips
/// leading/trailing bullet punctuation, and collapses whitespace runs. Falls
/// back to the trimmed original text when nothing is left, so non-empty input
/// never produces an empty description.
pub fn event_text(full_text: &str, date_text: &str) -> String {
    let removed = full_text.replacen(date_text, "", 1);
    let cleaned = removed
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | '•'))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        full_text.trim().to_string()
    } else {
        cleaned
    }
}
