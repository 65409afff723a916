//! Product catalog seam
//!
//! The sync orchestrator only talks to [`ProductCatalog`]; [`crate::WixClient`]
//! is the HTTP implementation and tests substitute fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::WixProduct;

use crate::ClientResult;

/// Remote product catalog
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Create a product on `site_id`, returning the remote product ID
    async fn create_product(&self, site_id: &str, payload: &WixProduct) -> ClientResult<String>;

    /// Overwrite product `product_id` on `site_id`, returning its (possibly new) ID
    async fn update_product(
        &self,
        site_id: &str,
        product_id: &str,
        payload: &WixProduct,
    ) -> ClientResult<String>;
}

/// Request body for create/update
#[derive(Debug, Serialize)]
pub struct ProductRequest<'a> {
    pub product: &'a WixProduct,
}

/// Response body for create/update/get
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    pub product: RemoteProduct,
}

/// Product as echoed back by the remote catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub revision: Option<String>,
}

/// Response body for product listing
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
}
