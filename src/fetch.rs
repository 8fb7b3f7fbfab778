use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::settings::Settings;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Manual HTML from the web, or from the local copy when asked to or when the fetch fails.
pub async fn load_manual(settings: &Settings, use_fallback: bool) -> Result<String> {
    if use_fallback {
        return read_fallback(&settings.fallback_path);
    }

    match fetch_manual(&settings.manual_url).await {
        Ok(html) => Ok(html),
        Err(e) => {
            warn!("Fetching manual failed ({:#}); using local copy", e);
            read_fallback(&settings.fallback_path)
        }
    }
}

/// GET the manual. The body is decoded as UTF-8 whatever the server declares.
pub async fn fetch_manual(url: &str) -> Result<String> {
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;

    info!("Fetching manual: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("HTTP {} from {}", status, url);
    }

    let bytes = response.bytes().await.context("Failed to read manual body")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_fallback(path: &Path) -> Result<String> {
    info!("Reading manual from {}", path.display());
    std::fs::read_to_string(path)
        .with_context(|| format!("Fallback manual not found at {}", path.display()))
}
