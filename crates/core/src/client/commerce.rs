use reqwest::{Client, Url};

use crate::errors::CoreError;
use crate::models::order::{CheckoutPayload, OrderConfirmation};
use crate::models::product::Product;

use super::config::ClientConfig;
use super::mock;

/// Commerce Data Client: catalog reads and checkout submission against the
/// configured backend, degrading to the built-in mock catalog on every
/// failure.
///
/// The public operations never return an error. A missing base URL, a
/// non-2xx status, a body that isn't the expected JSON, a network error, or
/// the per-request timeout firing all resolve to the same deterministic
/// local fallback. The fallible paths live in the `try_*` methods so tests
/// can still observe what went wrong.
pub struct CommerceClient {
    config: ClientConfig,
    http: Client,
}

impl std::fmt::Debug for CommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl CommerceClient {
    pub fn new(config: ClientConfig) -> Self {
        let builder = Client::builder();
        // Timeout doubles as the cancellation signal: when it fires the
        // in-flight request is aborted and surfaces as a reqwest error,
        // which the fallback paths absorb. Not available on wasm, where the
        // embedding fetch layer bounds requests instead.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        Self {
            config,
            http: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }

    /// Client configured from the environment (see `BASE_URL_ENV_VARS`).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// True when no base URL is configured and every call serves mock data.
    #[must_use]
    pub fn is_mock_mode(&self) -> bool {
        self.config.base_url.is_none()
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Fetch the product catalog. Falls back to the built-in mock catalog in
    /// mock mode and on any remote failure.
    pub async fn fetch_catalog(&self) -> Vec<Product> {
        match self.config.base_url.as_deref() {
            None => mock::catalog(),
            Some(base) => self
                .try_fetch_catalog(base)
                .await
                .unwrap_or_else(|_| mock::catalog()),
        }
    }

    /// Fetch a single product by id. Falls back to a mock-catalog lookup,
    /// which may itself come up empty.
    pub async fn fetch_product(&self, id: &str) -> Option<Product> {
        match self.config.base_url.as_deref() {
            None => mock::product_by_id(id),
            Some(base) => match self.try_fetch_product(base, id).await {
                Ok(product) => Some(product),
                Err(_) => mock::product_by_id(id),
            },
        }
    }

    /// Submit a checkout payload. In mock mode, and on any remote failure,
    /// returns a synthesized local confirmation instead.
    pub async fn submit_checkout(&self, payload: &CheckoutPayload) -> OrderConfirmation {
        match self.config.base_url.as_deref() {
            None => OrderConfirmation::mock(),
            Some(base) => self
                .try_submit_checkout(base, payload)
                .await
                .unwrap_or_else(|_| OrderConfirmation::mock()),
        }
    }

    // ── Fallible internals ──────────────────────────────────────────

    async fn try_fetch_catalog(&self, base: &str) -> Result<Vec<Product>, CoreError> {
        let resp = self.http.get(format!("{base}/products")).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::HttpStatus(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    async fn try_fetch_product(&self, base: &str, id: &str) -> Result<Product, CoreError> {
        // Url::path_segments_mut percent-escapes the id, so ids with
        // slashes or spaces can't break out of the /products/ path.
        let mut url =
            Url::parse(base).map_err(|e| CoreError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| CoreError::InvalidBaseUrl(base.to_string()))?
            .push("products")
            .push(id);

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::HttpStatus(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    async fn try_submit_checkout(
        &self,
        base: &str,
        payload: &CheckoutPayload,
    ) -> Result<OrderConfirmation, CoreError> {
        let resp = self
            .http
            .post(format!("{base}/checkout"))
            .json(payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(CoreError::HttpStatus(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }
}
