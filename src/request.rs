use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use tracing::{debug, error};

use crate::parse::Item;
use crate::{Config, Error, Result};

/// Requests the item record for `pid` and decodes it.
pub async fn fetch_item(client: &Client, config: &Config, pid: &str) -> Result<Item> {
    let url = config.item_url(pid);
    debug!("Requesting item {pid}: {url}");

    let res = get_checked(client, &url).await?;
    let body = res.bytes().await.map_err(|e| {
        error!("URL Error: {e} ({url})");
        Error::network(&url, e)
    })?;

    serde_json::from_slice::<Item>(&body).map_err(|e| {
        error!("JSON Decode Error: {e} ({url})");
        Error::Decode(e)
    })
}

/// Sends a GET and turns connection failures and non-2xx statuses into errors.
/// Both are logged here, where the url is known.
pub(crate) async fn get_checked(client: &Client, url: &str) -> Result<Response> {
    let res = client.get(url).send().await.map_err(|e| {
        error!("URL Error: {e} ({url})");
        Error::network(url, e)
    })?;

    let status = res.status();
    if !status.is_success() {
        let reason = reason_phrase(&res);
        error!("HTTP Error {}: {reason} ({url})", status.as_u16());
        return Err(Error::Http {
            status: status.as_u16(),
            reason,
            url: url.to_string(),
        });
    }
    Ok(res)
}

/// The phrase the server sent, or the canonical one for the status.
/// hyper only keeps the sent phrase when it differs from the canonical one.
fn reason_phrase(res: &Response) -> String {
    res.extensions()
        .get::<ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .or_else(|| res.status().canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}
