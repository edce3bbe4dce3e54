use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, Level};
use url::Url;

use super::post_json;
use crate::{
    error::{snippet, Error},
    menu::MenuPlan,
};

const QUERY: &str = include_str!("location.graphql");
const OPERATION_NAME: &str = "Location";
/// asks the backend for today's opening hours
const WEEK_DAY_NOW: &str = "now";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
    operation_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    location_uri: &'a str,
    week_day: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiResponse {
    data: Option<ResponseData>,
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ResponseData {
    node_by_uri: Option<LocationNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LocationNode {
    title: Option<String>,
    /// the week's menu as a JSON document serialized into a string
    menuplan_current_week: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GraphQlError {
    message: String,
}

fn request_body(location_uri: &str) -> crate::Result<Vec<u8>> {
    let request = GraphQlRequest {
        query: QUERY,
        variables: Variables {
            location_uri,
            week_day: WEEK_DAY_NOW,
        },
        operation_name: OPERATION_NAME,
    };
    serde_json::to_vec(&request).map_err(Error::Encode)
}

fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.mensen.at"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.mensen.at/"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("mensa_menu/", env!("CARGO_PKG_VERSION"))),
    );
    headers
}

/// Unwraps the envelope and then decodes the menu string inside it.
fn decode_response(body: &[u8]) -> crate::Result<MenuPlan> {
    let response: ApiResponse = serde_json::from_slice(body).map_err(|e| {
        Error::Decode(format!(
            "outer response: {e}; body was: {}",
            snippet(&String::from_utf8_lossy(body))
        ))
    })?;

    let node = response
        .data
        .and_then(|data| data.node_by_uri)
        .ok_or_else(|| {
            if response.errors.is_empty() {
                Error::decode_error("response has no location node")
            } else {
                let messages: Vec<&str> =
                    response.errors.iter().map(|e| e.message.as_str()).collect();
                Error::Decode(format!("graphql errors: {}", messages.join("; ")))
            }
        })?;

    if let Some(title) = &node.title {
        log::debug!("menu plan for location {title:?}");
    }

    let menu = node.menuplan_current_week.unwrap_or_default();
    serde_json::from_str(&menu).map_err(|e| {
        Error::Decode(format!(
            "inner menu plan: {e}; string was: {}",
            snippet(&menu)
        ))
    })
}

/// Asks the GraphQL backend for `location_uri`'s menu of the current week.
#[instrument(skip(client, endpoint), fields(endpoint = %endpoint), level = Level::TRACE)]
pub async fn fetch_api_menu(
    client: &Client,
    endpoint: &Url,
    location_uri: &str,
) -> crate::Result<MenuPlan> {
    let body = request_body(location_uri)?;
    let response = post_json(client, endpoint, request_headers(), body, TIMEOUT).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Fetch(format!("reading body from {endpoint} failed: {e}")))?;
    decode_response(&bytes)
}
