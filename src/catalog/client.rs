//! HTTP client for the catalog's `/videos` listing endpoint.
//!
//! The listing is an idempotent paged read, so the client layers a small
//! in-session cache over it: repeating an identical request (same page,
//! limit, and filter snapshot) within one run is served from memory. The
//! cache never outlives the process.
//!
//! Transient failures (timeout, network, 5xx) are retried with exponential
//! backoff before surfacing; everything else fails immediately.

use crate::catalog::types::{CatalogError, PageRequest, PageResponse};
use lru::LruCache;
use secrecy::{ExposeSecret, SecretString};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Maximum response body size (2 MB). A page of 12 catalog entries is a few
/// KB; anything near this limit is a broken or hostile server.
const MAX_RESPONSE_SIZE: usize = 2 * 1024 * 1024;

/// Retries for transient failures, with 1s/2s/4s backoff.
const MAX_RETRIES: u32 = 3;

/// Cached page responses kept per session.
const PAGE_CACHE_CAPACITY: usize = 64;

/// Client for the catalog listing API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: Option<SecretString>,
    /// Idempotent reads keyed by the full request.
    page_cache: Mutex<LruCache<PageRequest, PageResponse>>,
}

impl CatalogClient {
    /// Build a client for `base_url`.
    ///
    /// HTTPS is required except for localhost (so tests can point at a
    /// wiremock server on 127.0.0.1). An `api_token`, when configured, is
    /// sent as a bearer header on every request.
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        api_token: Option<SecretString>,
    ) -> Result<Self, CatalogError> {
        if !base_url.starts_with("https://") {
            let is_localhost =
                base_url.starts_with("http://127.0.0.1") || base_url.starts_with("http://localhost");
            if !is_localhost {
                tracing::error!(base_url = %base_url, "Rejecting non-HTTPS catalog URL");
                return Err(CatalogError::InsecureBaseUrl);
            }
            tracing::warn!(base_url = %base_url, "Using non-HTTPS catalog URL (localhost only)");
        }

        let mut base_url = Url::parse(base_url).map_err(|_| CatalogError::InvalidBaseUrl)?;
        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let cap = NonZeroUsize::new(PAGE_CACHE_CAPACITY).expect("nonzero capacity");
        Ok(Self {
            http,
            base_url,
            api_token,
            page_cache: Mutex::new(LruCache::new(cap)),
        })
    }

    /// Fetch one page of the catalog listing.
    ///
    /// Tolerates an empty result set (`videos = []`, `has_next_page =
    /// false`). Safe to call repeatedly with identical arguments; identical
    /// requests within a session are answered from the page cache.
    pub async fn list_videos(&self, request: &PageRequest) -> Result<PageResponse, CatalogError> {
        if let Some(cached) = self
            .page_cache
            .lock()
            .expect("page cache lock poisoned")
            .get(request)
            .cloned()
        {
            tracing::debug!(page = request.page, "Serving page from session cache");
            return Ok(cached);
        }

        let response = self.fetch_with_retry(request).await?;

        self.page_cache
            .lock()
            .expect("page cache lock poisoned")
            .put(request.clone(), response.clone());
        Ok(response)
    }

    /// Drop every cached page so subsequent requests go to the server.
    ///
    /// The manual refresh path exists to pick up server-side changes, which
    /// the session cache would otherwise replay for the rest of the run.
    pub fn invalidate_cache(&self) {
        self.page_cache
            .lock()
            .expect("page cache lock poisoned")
            .clear();
    }

    /// Retry transient failures with exponential backoff: 1s, 2s, 4s.
    async fn fetch_with_retry(&self, request: &PageRequest) -> Result<PageResponse, CatalogError> {
        let mut retry_count = 0;
        loop {
            match self.fetch_once(request).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_retryable() && retry_count < MAX_RETRIES => {
                    let delay = 1u64 << retry_count;
                    tracing::debug!(
                        error = %e,
                        retry = retry_count + 1,
                        delay_secs = delay,
                        "Retrying catalog fetch after transient error"
                    );
                    tokio::time::sleep(Duration::from_secs(delay)).await;
                    retry_count += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, request: &PageRequest) -> Result<PageResponse, CatalogError> {
        let url = self
            .base_url
            .join("videos")
            .map_err(|_| CatalogError::InvalidBaseUrl)?;

        let mut builder = self
            .http
            .get(url)
            .query(&request.to_query_pairs())
            .timeout(REQUEST_TIMEOUT);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        tracing::debug!(
            page = request.page,
            limit = request.limit,
            "Fetching catalog page"
        );

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        if let Some(len) = response.content_length() {
            if len as usize > MAX_RESPONSE_SIZE {
                return Err(CatalogError::ResponseTooLarge(MAX_RESPONSE_SIZE));
            }
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Network(e)
            }
        })?;
        if body.len() > MAX_RESPONSE_SIZE {
            return Err(CatalogError::ResponseTooLarge(MAX_RESPONSE_SIZE));
        }

        let page: PageResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            page = request.page,
            videos = page.videos.len(),
            has_next_page = page.has_next_page,
            "Catalog page received"
        );
        Ok(page)
    }
}
