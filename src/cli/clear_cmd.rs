//! `termscout clear [url]` — remove stored date collections.

use crate::store::DateStore;
use anyhow::Result;

/// Run the clear command. Clears one collection when a URL is given,
/// everything otherwise.
pub fn run(url: Option<&str>, quiet: bool) -> Result<()> {
    let store = DateStore::default_store()?;
    let removed = store.clear(url)?;
    if !quiet {
        match url {
            Some(url) if removed == 0 => eprintln!("  Nothing stored for {url}"),
            Some(url) => eprintln!("  Cleared stored dates for {url}"),
            None => eprintln!("  Cleared {removed} stored collection(s)"),
        }
    }
    Ok(())
}
