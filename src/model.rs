//! Data model for scraped calendar dates.
//!
//! Field names serialize in camelCase so stored collections keep the JSON
//! shape the records have always had on disk.

use crate::dates::classify;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema version stamped into every saved [`ScrapedDateCollection`].
pub const SCHEMA_VERSION: u32 = 1;

/// One dated event pulled from a page. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedDate {
    /// Event description as extracted from the page.
    pub event: String,
    /// The event's calendar date, normalized to midnight UTC.
    pub date: DateTime<Utc>,
    /// Academic term label in effect where the date was found (e.g. "Winter 2025").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Coarse classification of the event text.
    pub category: EventCategory,
    /// Whether the event text reads as a deadline.
    pub deadline: bool,
    /// URL of the page the date was scraped from.
    pub source_url: String,
    /// When this record was emitted.
    pub scraped_at: DateTime<Utc>,
}

impl ScrapedDate {
    /// Build a record from an extracted event/date pair, classifying the
    /// event text and stamping the emission time.
    pub fn new(event: String, date: NaiveDate, term: Option<String>, source_url: &str) -> Self {
        let category = classify::categorize(&event);
        let deadline = classify::is_deadline(&event);
        Self {
            event,
            date: date.and_time(NaiveTime::MIN).and_utc(),
            term,
            category,
            deadline,
            source_url: source_url.to_string(),
            scraped_at: Utc::now(),
        }
    }
}

/// Coarse event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Registration,
    Deadline,
    Exam,
    Academic,
    Closure,
    Other,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventCategory::Registration => "registration",
            EventCategory::Deadline => "deadline",
            EventCategory::Exam => "exam",
            EventCategory::Academic => "academic",
            EventCategory::Closure => "closure",
            EventCategory::Other => "other",
        };
        f.write_str(s)
    }
}

/// A scrape result set grouped under its source URL, as persisted by the
/// [`store`](crate::store) layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedDateCollection {
    pub source_url: String,
    /// Organization name inferred from the source URL host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    pub scraped_at: DateTime<Utc>,
    pub dates: Vec<ScrapedDate>,
    pub version: u32,
}
