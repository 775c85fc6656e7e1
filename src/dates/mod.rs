//! Free-text date recognition and event classification.
//!
//! Everything here fails soft: unrecognizable input yields `None` or an
//! empty list, never an error. The extractors lean on that to skip
//! candidates instead of aborting a scan.

pub mod classify;
pub mod parser;

pub use classify::{categorize, event_text, is_deadline};
pub use parser::{extract_dates_from_text, extract_term, parse};
