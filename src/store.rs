//! Filesystem store for scraped date collections.
//!
//! One JSON file per source page under the store directory, keyed by a
//! normalized form of the page URL. Saving overwrites the previous
//! collection for the same key and restamps the scrape time and schema
//! version.

use crate::model::{ScrapedDate, ScrapedDateCollection, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Derive a stable storage key from a page URL: host plus path with one
/// trailing slash stripped. Unparseable input falls back to a sanitized
/// copy of itself.
pub fn storage_key(url: &str) -> String {
    match Url::parse(url) {
        Ok(u) => {
            let joined = format!("{}{}", u.host_str().unwrap_or(""), u.path());
            joined.strip_suffix('/').unwrap_or(&joined).to_string()
        }
        Err(_) => url
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
    }
}

/// Infer a human-readable organization name from a page URL: the host with
/// any "www." prefix stripped.
pub fn university_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// JSON-file-backed store of [`ScrapedDateCollection`]s.
pub struct DateStore {
    dir: PathBuf,
}

impl DateStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create store dir: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open the default store at `~/.termscout/dates/`.
    pub fn default_store() -> Result<Self> {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".termscout")
            .join("dates");
        Self::open(dir)
    }

    /// Wrap a scrape result set into a collection and persist it, replacing
    /// any previous collection stored for the same key.
    pub fn save(&self, url: &str, dates: Vec<ScrapedDate>) -> Result<ScrapedDateCollection> {
        let collection = ScrapedDateCollection {
            source_url: url.to_string(),
            university: university_from_url(url),
            scraped_at: Utc::now(),
            dates,
            version: SCHEMA_VERSION,
        };

        let key = storage_key(url);
        let path = self.file_for(&key);
        let json = serde_json::to_vec_pretty(&collection)
            .context("failed to serialize date collection")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!(
            "saved {} dates under '{}' ({})",
            collection.dates.len(),
            key,
            path.display()
        );
        Ok(collection)
    }

    /// Load the collection stored for a URL, if any.
    pub fn get(&self, url: &str) -> Result<Option<ScrapedDateCollection>> {
        let path = self.file_for(&storage_key(url));
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let collection = serde_json::from_slice(&json)
            .with_context(|| format!("corrupt collection file: {}", path.display()))?;
        Ok(Some(collection))
    }

    /// All stored collections as (key, collection) pairs, unreadable files
    /// skipped.
    pub fn all(&self) -> Result<Vec<(String, ScrapedDateCollection)>> {
        let mut collections = Vec::new();

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read store dir: {}", self.dir.display()))?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Ok(json) = fs::read(&path) else { continue };
            match serde_json::from_slice::<ScrapedDateCollection>(&json) {
                Ok(collection) => {
                    let key = storage_key(&collection.source_url);
                    collections.push((key, collection));
                }
                Err(e) => {
                    tracing::warn!("skipping corrupt collection {}: {e}", path.display());
                }
            }
        }

        collections.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(collections)
    }

    /// Remove the collection for one URL, or every collection when `url` is
    /// `None`. Returns how many files were removed.
    pub fn clear(&self, url: Option<&str>) -> Result<usize> {
        match url {
            Some(url) => {
                let path = self.file_for(&storage_key(url));
                if path.exists() {
                    fs::remove_file(&path)
                        .with_context(|| format!("failed to remove {}", path.display()))?;
                    Ok(1)
                } else {
                    Ok(0)
                }
            }
            None => {
                let mut removed = 0;
                for (_, collection) in self.all()? {
                    let path = self.file_for(&storage_key(&collection.source_url));
                    if fs::remove_file(&path).is_ok() {
                        removed += 1;
                    }
                }
                Ok(removed)
            }
        }
    }

    /// File path for a storage key; the key is sanitized for the filesystem,
    /// the authoritative key lives inside the collection's source URL.
    fn file_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}
