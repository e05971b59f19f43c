//! Page retrieval
//!
//! Requires the `fetch` feature (needs reqwest)

use crate::relay::{RelayResponse, relay_request_url};
use anyhow::{Context, Result, anyhow};
use tracing::debug;
use url::Url;

fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(format!(
            "Mozilla/5.0 (compatible; seolens-core/{})",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?)
}

/// Fetch HTML content from a URL
pub async fn fetch_html(url: &str) -> Result<String> {
    let response = client()?
        .get(url)
        .send()
        .await
        .context("Failed to fetch URL")?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!(
            "server responded with status {status}; the URL may not be reachable"
        ));
    }

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;
    debug!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}

/// Fetch HTML content through a relay
pub async fn fetch_via_relay(relay: &Url, url: &str) -> Result<String> {
    let request = relay_request_url(relay, url);
    let response = client()?
        .get(request.as_str())
        .send()
        .await
        .context("Failed to reach relay")?;

    let status = response.status();
    if !status.is_success() {
        // The relay still sends a JSON error body; surface it when present
        let detail = response
            .json::<RelayResponse>()
            .await
            .ok()
            .and_then(|body| body.into_contents().err())
            .map(|err| format!(": {err}"))
            .unwrap_or_default();
        return Err(anyhow!("relay responded with status {status}{detail}"));
    }

    let body: RelayResponse = response
        .json()
        .await
        .context("Failed to decode relay response")?;
    let html = body.into_contents()?;
    debug!("Fetched {} bytes from {} via {}", html.len(), url, relay);
    Ok(html)
}
