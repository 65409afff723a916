//! HTTP client for the Wix Stores catalog API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::WixProduct;

use crate::catalog::{ProductListResponse, ProductRequest, ProductResponse, RemoteProduct};
use crate::{ClientConfig, ClientError, ClientResult, ProductCatalog};

/// Header carrying the target site
pub const SITE_ID_HEADER: &str = "wix-site-id";

/// HTTP client for the Wix catalog
#[derive(Debug, Clone)]
pub struct WixClient {
    client: Client,
    config: ClientConfig,
}

impl WixClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Start a request with the site's credential attached.
    ///
    /// `segments` are appended to the base URL path, each percent-encoded.
    fn request(
        &self,
        method: Method,
        site_id: &str,
        segments: &[&str],
    ) -> ClientResult<RequestBuilder> {
        let api_key = self.config.credential_for(site_id).ok_or_else(|| {
            ClientError::Config(format!("No API key configured for site {site_id}"))
        })?;

        let base_url = &self.config.base_url;
        let mut url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL {base_url}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("Base URL {base_url} cannot take a path")))?
            .pop_if_empty()
            .extend(segments);

        Ok(self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, api_key)
            .header(SITE_ID_HEADER, site_id))
    }

    async fn read_body(response: reqwest::Response) -> ClientResult<(StatusCode, String)> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::status(status, text));
        }
        Ok((status, text))
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let (status, text) = Self::read_body(response).await?;
        serde_json::from_str(&text).map_err(|e| ClientError::malformed(e.to_string(), status, text))
    }

    /// Handle a single-product response; the product must carry an ID
    async fn handle_product_response(response: reqwest::Response) -> ClientResult<RemoteProduct> {
        let (status, text) = Self::read_body(response).await?;
        let parsed: Result<ProductResponse, _> = serde_json::from_str(&text);

        match parsed {
            Ok(ProductResponse { product }) if !product.id.trim().is_empty() => Ok(product),
            Ok(_) => Err(ClientError::malformed("empty product id", status, text)),
            Err(e) => Err(ClientError::malformed(e.to_string(), status, text)),
        }
    }

    async fn send_product(
        &self,
        request: RequestBuilder,
        payload: &WixProduct,
    ) -> ClientResult<RemoteProduct> {
        let errors = payload.validation_errors();
        if !errors.is_empty() {
            return Err(ClientError::InvalidProduct(errors.join("; ")));
        }

        let response = request.json(&ProductRequest { product: payload }).send().await?;
        Self::handle_product_response(response).await
    }

    /// Fetch a product
    pub async fn get_product(
        &self,
        site_id: &str,
        product_id: &str,
    ) -> ClientResult<RemoteProduct> {
        let response = self
            .request(Method::GET, site_id, &["products", product_id])?
            .send()
            .await?;
        Self::handle_product_response(response).await
    }

    /// Check that the site is reachable with the configured credential
    pub async fn verify_connection(&self, site_id: &str) -> ClientResult<()> {
        let response = self
            .request(Method::GET, site_id, &["products"])?
            .query(&[("limit", "1")])
            .send()
            .await?;
        let listing = Self::handle_response::<ProductListResponse>(response).await?;
        tracing::debug!(site_id, products = listing.products.len(), "Wix connection verified");
        Ok(())
    }
}

#[async_trait]
impl ProductCatalog for WixClient {
    async fn create_product(&self, site_id: &str, payload: &WixProduct) -> ClientResult<String> {
        tracing::info!(site_id, name = %payload.name, "Calling Wix create product API");
        let request = self.request(Method::POST, site_id, &["products"])?;
        let product = self.send_product(request, payload).await?;
        Ok(product.id)
    }

    async fn update_product(
        &self,
        site_id: &str,
        product_id: &str,
        payload: &WixProduct,
    ) -> ClientResult<String> {
        tracing::info!(site_id, product_id, "Calling Wix update product API");
        let request = self.request(Method::PATCH, site_id, &["products", product_id])?;
        let product = self.send_product(request, payload).await?;
        Ok(product.id)
    }
}
