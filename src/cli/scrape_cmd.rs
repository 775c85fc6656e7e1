//! `termscout scrape <target>` — scrape a page for key dates.

use crate::extract;
use crate::fetch::PageFetcher;
use crate::store::DateStore;
use anyhow::{bail, Context, Result};
use std::path::Path;
use url::Url;

/// Run the scrape command. `target` is an http(s) URL or a local HTML file.
pub async fn run(target: &str, save: bool, timeout_ms: u64, json: bool, quiet: bool) -> Result<()> {
    let (html, source_url) = load_target(target, timeout_ms).await?;

    // scraper's types are !Send, so the pipeline runs on a blocking thread.
    let pipeline_url = source_url.clone();
    let dates = tokio::task::spawn_blocking(move || extract::scrape_page(&html, &pipeline_url))
        .await
        .context("extraction task panicked")?;

    if save {
        let store = DateStore::default_store()?;
        store.save(&source_url, dates.clone())?;
        if !quiet {
            eprintln!("  Saved {} date(s) for {}", dates.len(), source_url);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    if dates.is_empty() {
        if !quiet {
            eprintln!("  No dates found on {source_url}");
        }
        return Ok(());
    }

    if !quiet {
        eprintln!("  Found {} date(s) on {}:", dates.len(), source_url);
        eprintln!();
        for d in &dates {
            let flag = if d.deadline { "!" } else { " " };
            eprintln!(
                "    {flag} {}  {:<12} {:<45} {}",
                d.date.format("%Y-%m-%d"),
                d.category.to_string(),
                truncate(&d.event, 45),
                d.term.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

/// Resolve the target to (html, source URL): fetch http(s) URLs, read
/// anything else as a local file.
async fn load_target(target: &str, timeout_ms: u64) -> Result<(String, String)> {
    if let Ok(url) = Url::parse(target) {
        if matches!(url.scheme(), "http" | "https") {
            let page = PageFetcher::new(timeout_ms).get(target).await?;
            if page.status >= 400 {
                bail!("GET {} returned HTTP {}", target, page.status);
            }
            return Ok((page.body, page.final_url));
        }
    }

    let path = Path::new(target);
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((html, format!("file://{target}")))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
