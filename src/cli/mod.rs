//! CLI subcommand implementations for the termscout binary.

pub mod clear_cmd;
pub mod list_cmd;
pub mod scrape_cmd;
