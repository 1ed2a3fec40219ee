//! HTTP header and error-mapping utilities.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::ConverseError;

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-200 HTTP status to a typed error.
pub fn status_to_error(status: u16, body: &str) -> ConverseError {
    match status {
        401 | 403 => ConverseError::Authentication(body.to_string()),
        429 => ConverseError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => ConverseError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Try to parse retry-after from JSON error body
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}
