//! HTTP client for the wallet backend.
//!
//! One GET per user action; no retries, no client-side timeout. Non-2xx
//! responses carry the raw body so the caller can dump it next to the
//! triggering element.

use cc_api_types::ApiError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Fetch `path` with the given query pairs and return the body text.
pub async fn get_text(path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
    let resp = Request::get(path)
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Http {
            status: resp.status(),
            body,
        });
    }

    Ok(body)
}

/// Fetch `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, &str)],
) -> Result<T, ApiError> {
    let body = get_text(path, query).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{e} \u{2014} raw: {body}")))
}
