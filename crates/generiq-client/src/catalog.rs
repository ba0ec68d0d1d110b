//! Static dataset loading.
//!
//! The price list is published as a single JSON document at a fixed URL,
//! regenerated monthly by the data pipeline. It is fetched at most once
//! per process: the first successful load is cached for the session and
//! every later call returns the same `Arc`. A failed load is not cached,
//! so a later call gets a fresh attempt.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use generiq_core::models::{Catalog, CatalogParseError};

/// Errors raised while loading the catalog. Callers treat every variant
/// the same way - data unavailable, fall back to the sample set - but the
/// variants keep the log lines useful.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] CatalogParseError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// A source of the drug catalog.
///
/// `load` must be idempotent: once it has succeeded, later calls return
/// the identical cached document.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> impl Future<Output = CatalogResult<Arc<Catalog>>> + Send;
}

/// HTTP client for the published dataset, with a process-lifetime cache.
pub struct StaticDbClient {
    http: reqwest::Client,
    url: String,
    cache: OnceCell<Arc<Catalog>>,
}

impl StaticDbClient {
    /// Client fetching the document at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            cache: OnceCell::new(),
        }
    }

    /// Client whose cache is already populated (for testing).
    pub fn preloaded(catalog: Catalog) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: String::new(),
            cache: OnceCell::new_with(Some(Arc::new(catalog))),
        }
    }

    async fn fetch(&self) -> CatalogResult<Arc<Catalog>> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        let catalog = Catalog::from_json(&body)?;

        tracing::info!(
            count = catalog.total_count,
            updated = %catalog.last_updated,
            "Loaded drug catalog"
        );
        Ok(Arc::new(catalog))
    }
}

impl CatalogSource for StaticDbClient {
    async fn load(&self) -> CatalogResult<Arc<Catalog>> {
        // Concurrent first calls are coalesced by the cell; an error
        // leaves it empty for the next attempt.
        self.cache
            .get_or_try_init(|| self.fetch())
            .await
            .cloned()
    }
}
