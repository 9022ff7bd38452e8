//! HTTP client for the catalog query service.
//!
//! Wraps `reqwest` with the URL building and response decoding the
//! storefront needs. Single-part lookups are cached using `moka`
//! (5-minute TTL) because the detail view tends to revisit the same
//! parts; listing queries always hit the server.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use partsbin_core::{Part, PartId, PartPage, PartsQuery};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL is invalid or a path cannot be joined onto it.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Part lookup found nothing.
    #[error("Part not found: {0}")]
    NotFound(PartId),

    /// The server replied with a status the client does not handle.
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

/// Client for the catalog query service.
///
/// Cheaply cloneable; clones share the connection pool and the part
/// lookup cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    part_cache: Cache<PartId, Part>,
}

impl CatalogClient {
    /// Create a new client for the catalog service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if `base_url` is not an
    /// absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let part_cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: Url::parse(base_url)?,
                part_cache,
            }),
        })
    }

    /// Fetch one page of catalog results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server replies with a
    /// non-success status, or the body is not a part page.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, query: &PartsQuery) -> Result<PartPage, ClientError> {
        let url = self.page_url(query)?;
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate_body(&body),
                "Catalog page request failed"
            );
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a single part by id, consulting the lookup cache first.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` for unknown ids, or a transport or
    /// parse error.
    #[instrument(skip(self))]
    pub async fn fetch_part(&self, id: PartId) -> Result<Part, ClientError> {
        if let Some(part) = self.inner.part_cache.get(&id).await {
            debug!("Cache hit for part");
            return Ok(part);
        }

        let url = self.inner.base_url.join(&format!("api/parts/{id}"))?;
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate_body(&body),
                "Part lookup failed"
            );
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let part: Part = serde_json::from_str(&body)?;

        // Cache the result
        self.inner.part_cache.insert(id, part.clone()).await;

        Ok(part)
    }

    /// Build the listing URL for `query`.
    ///
    /// Pagination is always sent; filters only when they constrain
    /// anything, matching what the browser storefront sends.
    fn page_url(&self, query: &PartsQuery) -> Result<Url, ClientError> {
        let mut url = self.inner.base_url.join("api/parts")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("offset", &query.offset.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if !query.search.is_empty() {
                pairs.append_pair("search", &query.search);
            }
            // The server defaults an absent minPrice to zero
            if !query.min_price.is_zero() {
                pairs.append_pair("minPrice", &query.min_price.to_string());
            }
            if let Some(max) = query.max_price {
                pairs.append_pair("maxPrice", &max.to_string());
            }
        }
        Ok(url)
    }
}

/// Clip response bodies before logging them.
fn truncate_body(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_rejects_relative_base_url() {
        assert!(matches!(
            CatalogClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_default_query_sends_only_pagination() {
        let client = CatalogClient::new("http://127.0.0.1:3003").unwrap();
        let url = client.page_url(&PartsQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3003/api/parts?offset=0&limit=10"
        );
    }

    #[test]
    fn test_filters_appear_when_set() {
        let client = CatalogClient::new("http://127.0.0.1:3003").unwrap();
        let url = client
            .page_url(&PartsQuery {
                search: "oil filter".to_owned(),
                max_price: Some(Decimal::new(15000, 2)),
                offset: 8,
                limit: 8,
                ..PartsQuery::default()
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3003/api/parts?offset=8&limit=8&search=oil+filter&maxPrice=150.00"
        );
    }

    #[test]
    fn test_min_price_sent_only_when_constraining() {
        let client = CatalogClient::new("http://127.0.0.1:3003").unwrap();
        let url = client
            .page_url(&PartsQuery {
                min_price: Decimal::new(500, 2),
                ..PartsQuery::default()
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3003/api/parts?offset=0&limit=10&minPrice=5.00"
        );
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let client = CatalogClient::new("http://127.0.0.1:3003/").unwrap();
        let url = client.page_url(&PartsQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3003/api/parts?offset=0&limit=10"
        );
    }

    #[test]
    fn test_truncate_body_clips_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate_body(&long).len(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
