//! `termscout list [url]` — show stored date collections.

use crate::model::ScrapedDateCollection;
use crate::store::DateStore;
use anyhow::Result;

/// Run the list command. With a URL, shows that collection in full;
/// without, summarizes every stored collection.
pub fn run(url: Option<&str>, json: bool, quiet: bool) -> Result<()> {
    let store = DateStore::default_store()?;

    match url {
        Some(url) => {
            let collection = store.get(url)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&collection)?);
                return Ok(());
            }
            match collection {
                Some(c) => print_collection(&c, quiet),
                None => {
                    if !quiet {
                        eprintln!("  Nothing stored for {url}");
                    }
                }
            }
        }
        None => {
            let all = store.all()?;
            if json {
                let mut map = serde_json::Map::new();
                for (key, c) in &all {
                    map.insert(key.clone(), serde_json::to_value(c)?);
                }
                println!("{}", serde_json::to_string_pretty(&map)?);
                return Ok(());
            }
            if all.is_empty() {
                if !quiet {
                    eprintln!("  No stored collections. Run 'termscout scrape <url> --save' first.");
                }
                return Ok(());
            }
            if !quiet {
                eprintln!("  {} stored collection(s):", all.len());
                eprintln!();
                for (key, c) in &all {
                    eprintln!(
                        "    {:<40} {:>4} date(s)  scraped {}",
                        key,
                        c.dates.len(),
                        c.scraped_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_collection(c: &ScrapedDateCollection, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!(
        "  {} — {} date(s), scraped {}",
        c.source_url,
        c.dates.len(),
        c.scraped_at.format("%Y-%m-%d %H:%M")
    );
    eprintln!();
    for d in &c.dates {
        eprintln!(
            "    {}  {:<12} {}",
            d.date.format("%Y-%m-%d"),
            d.category.to_string(),
            d.event
        );
    }
}
