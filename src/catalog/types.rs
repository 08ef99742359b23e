//! Wire types for the catalog API and the client error taxonomy.

use crate::browse::filter::FilterState;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors from a `list_videos` call.
///
/// Transient errors (timeout, network, 5xx) are retried inside the client;
/// anything that survives the retries reaches the controller as a single
/// failed fetch and never corrupts feed state.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request exceeded the client timeout.
    #[error("Request timed out")]
    Timeout,
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the size limit.
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Base URL could not be parsed.
    #[error("Invalid catalog base URL")]
    InvalidBaseUrl,
    /// Non-HTTPS base URL (localhost excepted, for testing).
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
}

impl CatalogError {
    /// Returns true if this error is transient and the request should be retried.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Timeout | CatalogError::Network(_) => true,
            CatalogError::HttpStatus(status) => *status >= 500,
            CatalogError::ResponseTooLarge(_)
            | CatalogError::Decode(_)
            | CatalogError::InvalidBaseUrl
            | CatalogError::InsecureBaseUrl => false,
        }
    }
}

// ============================================================================
// Video
// ============================================================================

/// A single catalog entry.
///
/// `id` is the stable identity the feed core depends on; everything else is
/// display data.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u64,
    /// Playback/landing URL, used by the open-in-browser action.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Page Request / Response
// ============================================================================

/// Fully determines one fetch against the catalog.
///
/// Two requests with identical fields are idempotent against the same
/// backing data, which is what makes the in-session page cache safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Items per page. Always > 0.
    pub limit: u32,
    pub filter: FilterState,
}

/// One page of results.
///
/// `has_next_page` defaults to `false` when the field is missing from the
/// payload: a malformed response stops pagination rather than looping.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default, alias = "hasNextPage")]
    pub has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> PageResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_full_response() {
        let resp = decode(
            r#"{
                "videos": [
                    {"_id": "a1", "title": "First", "category": "Tech",
                     "createdAt": "2024-03-01T12:00:00Z", "views": 42,
                     "url": "https://example.com/v/a1"}
                ],
                "hasNextPage": true
            }"#,
        );
        assert_eq!(resp.videos.len(), 1);
        assert!(resp.has_next_page);
        assert_eq!(resp.videos[0].id, "a1");
        assert_eq!(resp.videos[0].views, 42);
        assert_eq!(resp.videos[0].category.as_deref(), Some("Tech"));
    }

    #[test]
    fn test_missing_has_next_page_fails_closed() {
        let resp = decode(r#"{"videos": []}"#);
        assert!(!resp.has_next_page);
        assert!(resp.videos.is_empty());
    }

    #[test]
    fn test_empty_object_is_valid_empty_page() {
        let resp = decode("{}");
        assert!(resp.videos.is_empty());
        assert!(!resp.has_next_page);
    }

    #[test]
    fn test_video_tolerates_sparse_fields() {
        let resp = decode(r#"{"videos": [{"id": "x", "title": "Bare"}]}"#);
        let v = &resp.videos[0];
        assert_eq!(v.id, "x");
        assert_eq!(v.views, 0);
        assert!(v.created_at.is_none());
        assert!(v.url.is_none());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(CatalogError::Timeout.is_retryable());
        assert!(CatalogError::HttpStatus(503).is_retryable());
        assert!(!CatalogError::HttpStatus(404).is_retryable());
        assert!(!CatalogError::InsecureBaseUrl.is_retryable());
    }
}
