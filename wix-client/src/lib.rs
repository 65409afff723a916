//! Wix Client - HTTP client for the Wix Stores catalog
//!
//! Creates and updates catalog products on a configured Wix site.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use catalog::{ProductCatalog, RemoteProduct};
pub use config::{ClientConfig, SiteConfig, SiteRegistry, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::WixClient;
