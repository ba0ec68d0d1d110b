//! Pill image lookup.
//!
//! The medication identification service returns zero or one product
//! photo per name query. The service sits behind a credential and does
//! not send CORS headers, so requests are routed through a public relay
//! proxy - a third-party availability dependency we do not control, which
//! is exactly why this whole module is best-effort: every failure is
//! swallowed and at worst a record simply has no picture.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use reqwest::Request;
use serde::Deserialize;

/// Identification service endpoint (name → product photo).
const IMAGE_BASE_URL: &str =
    "https://apis.data.go.kr/1471000/MdcinGrnIdntfcInfoService03/getMdcinGrnIdntfcInfoList01";

/// CORS relay the identification service is reached through.
const PROXY_BASE: &str = "https://api.allorigins.win/raw";

/// Environment variable the deployment stores the service credential in.
const SERVICE_KEY_VAR: &str = "DATA_API_KEY";

/// A best-effort source of product photos.
///
/// Implementations never surface errors: a lookup either yields a URL or
/// it does not.
pub trait ImageSource: Send + Sync {
    fn fetch_image(&self, drug_name: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Null source: never finds an image. For headless use and tests.
pub struct NoImages;

impl ImageSource for NoImages {
    async fn fetch_image(&self, _drug_name: &str) -> Option<String> {
        None
    }
}

/// Client for the identification service, with a per-name in-process
/// cache. Cache entries are written once and never invalidated; the
/// underlying registry changes on a much longer horizon than a session.
pub struct PillImageClient {
    http: reqwest::Client,
    service_key: String,
    cache: Mutex<HashMap<String, String>>,
}

#[derive(Deserialize)]
struct IdentifyResponse {
    body: Option<IdentifyBody>,
}

#[derive(Deserialize)]
struct IdentifyBody {
    #[serde(default)]
    items: Option<Vec<IdentifyItem>>,
}

#[derive(Deserialize)]
struct IdentifyItem {
    item_image: Option<String>,
}

impl PillImageClient {
    /// Client authenticating with `service_key`.
    pub fn new(service_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            service_key: service_key.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Client reading the credential from the `DATA_API_KEY` environment
    /// variable. `None` when the variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        match std::env::var(SERVICE_KEY_VAR) {
            Ok(key) if !key.is_empty() => Some(Self::new(key)),
            _ => None,
        }
    }

    /// Build the proxied lookup request for a (already normalized) query
    /// name. The full identification-service URL, credential included,
    /// travels as a single encoded query parameter of the relay.
    fn lookup_request(&self, query_name: &str) -> Result<Request, reqwest::Error> {
        let target = self
            .http
            .get(IMAGE_BASE_URL)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("item_name", query_name),
                ("pageNo", "1"),
                ("numOfRows", "1"),
                ("type", "json"),
            ])
            .build()?;

        self.http
            .get(PROXY_BASE)
            .query(&[("url", target.url().as_str())])
            .build()
    }

    async fn lookup(&self, query_name: &str) -> Result<Option<String>, ImageLookupError> {
        let request = self.lookup_request(query_name)?;
        let response = self.http.execute(request).await?;

        if !response.status().is_success() {
            return Err(ImageLookupError::Status(response.status()));
        }

        let parsed: IdentifyResponse = response.json().await?;
        Ok(first_image_url(parsed))
    }
}

/// Internal error detail; never escapes [`ImageSource::fetch_image`].
#[derive(thiserror::Error, Debug)]
enum ImageLookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("proxy returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Extract the single image URL, if the response carried one.
fn first_image_url(response: IdentifyResponse) -> Option<String> {
    response
        .body?
        .items?
        .into_iter()
        .next()?
        .item_image
        .filter(|url| !url.is_empty())
}

impl ImageSource for PillImageClient {
    async fn fetch_image(&self, drug_name: &str) -> Option<String> {
        if let Some(cached) = self.cache.lock().ok()?.get(drug_name) {
            return Some(cached.clone());
        }

        let query_name = generiq_core::models::image_query_name(drug_name);
        match self.lookup(query_name).await {
            Ok(Some(url)) => {
                if let Ok(mut cache) = self.cache.lock() {
                    cache.entry(drug_name.to_string()).or_insert_with(|| url.clone());
                }
                Some(url)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(drug_name, error = %e, "Image lookup failed");
                None
            }
        }
    }
}
