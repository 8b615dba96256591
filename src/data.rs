//! Blocking HTTP access to the bounty and image APIs.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::model::{ImageSourceResponse, RawCharacterItem};

/// Sent by the image-lookup build; the image API rejects some default agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub fn http_client(timeout: Duration, user_agent: Option<&str>) -> Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder().timeout(timeout);
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent);
    }
    Ok(builder.build()?)
}

fn get_json<T: DeserializeOwned>(client: &reqwest::blocking::Client, url: &str) -> Result<T> {
    log::info!("downloading {url}");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request to {url} failed"))?;
    if !response.status().is_success() {
        bail!("failed to download {}: HTTP {}", url, response.status());
    }

    let text = response
        .text()
        .with_context(|| format!("failed to read response body from {url}"))?;
    log::debug!("received {} bytes from {url}", text.len());
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON from {url}"))
}

/// Downloads the character list from the bounty API.
pub fn fetch_characters(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<RawCharacterItem>> {
    let items: Vec<RawCharacterItem> = get_json(client, url)?;
    log::info!("bounty API returned {} characters", items.len());
    Ok(items)
}

/// Downloads the anime character list used for image lookup.
pub fn fetch_image_source(client: &reqwest::blocking::Client, url: &str) -> Result<ImageSourceResponse> {
    get_json(client, url)
}
