//! Async HTTP fetch for calendar pages.
//!
//! Not a browser — just HTTP requests. Handles redirects, timeouts, retry
//! on 5xx, and Retry-After backoff on 429.

use anyhow::{Context, Result};
use std::time::Duration;

/// A fetched page body with its response metadata.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client for page fetching.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with a standard Chrome user-agent. Some calendar
    /// hosts refuse non-browser user-agents outright.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET with retry on 5xx and backoff on 429.
    pub async fn get(&self, url: &str) -> Result<FetchedPage> {
        let mut retries = 0u32;
        let max_retries = 2;

        loop {
            let resp = self.client.get(url).send().await;

            match resp {
                Ok(r) => {
                    let status = r.status().as_u16();
                    let final_url = r.url().to_string();

                    if status >= 500 && retries < max_retries {
                        retries += 1;
                        let delay = Duration::from_millis(500 * 2u64.pow(retries - 1));
                        tracing::debug!("GET {url} returned {status}, retrying in {delay:?}");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if status == 429 && retries < max_retries {
                        retries += 1;
                        let retry_after = r
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(2);
                        tokio::time::sleep(Duration::from_secs(retry_after.min(30))).await;
                        continue;
                    }

                    let body = r
                        .text()
                        .await
                        .with_context(|| format!("failed to read body from {url}"))?;

                    return Ok(FetchedPage {
                        url: url.to_string(),
                        final_url,
                        status,
                        body,
                    });
                }
                Err(e) => {
                    if retries < max_retries {
                        retries += 1;
                        tokio::time::sleep(Duration::from_millis(500)).await;
                        continue;
                    }
                    return Err(e).with_context(|| format!("GET {url} failed"));
                }
            }
        }
    }
}
