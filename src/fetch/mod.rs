mod api;
mod scrape;

use std::time::Duration;

use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use url::Url;

use crate::error::{snippet, Error};

pub use api::fetch_api_menu;
pub use scrape::fetch_scraped_menu;

pub fn make_client() -> crate::Result<Client> {
    Client::builder().gzip(true).build().map_err(Error::from)
}

/// Fails unless the upstream answered 200. The error keeps the status and the
/// start of the body so a failed run can be diagnosed from the log alone.
async fn expect_ok(url: &Url, response: Response) -> crate::Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Fetch(format!(
        "{url} answered {status}: {}",
        snippet(&body)
    )))
}

pub async fn get_page(client: &Client, url: &Url) -> crate::Result<Response> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::Fetch(format!("GET {url} failed: {e}")))?;
    expect_ok(url, response).await
}

pub async fn post_json(
    client: &Client,
    url: &Url,
    headers: HeaderMap,
    body: Vec<u8>,
    timeout: Duration,
) -> crate::Result<Response> {
    let response = client
        .post(url.clone())
        .headers(headers)
        .body(body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| Error::Fetch(format!("POST {url} failed: {e}")))?;
    expect_ok(url, response).await
}
