//! Client configuration
//!
//! Site selection is static: a table of short names to Wix site IDs with one
//! default entry. The table is fixed when the client is built.

use std::collections::BTreeMap;

use crate::{ClientError, ClientResult, WixClient};

/// Wix Stores catalog API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.wixapis.com/stores/v3";

/// A Wix site that can receive synced products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Short name used in configuration (e.g. "dev")
    pub name: String,
    /// Opaque Wix site ID, sent as the `wix-site-id` header
    pub site_id: String,
    pub display_name: String,
    /// Site-specific API key, overrides the account key
    pub api_key: Option<String>,
}

impl SiteConfig {
    pub fn new(name: impl Into<String>, site_id: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            site_id: site_id.into(),
            api_key: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Named sites with exactly one default
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: BTreeMap<String, SiteConfig>,
    default_site: String,
}

impl SiteRegistry {
    /// Build a registry; fails if the default is not in `sites` or a site ID is blank
    pub fn new(
        sites: impl IntoIterator<Item = SiteConfig>,
        default_site: impl Into<String>,
    ) -> ClientResult<Self> {
        let sites: BTreeMap<String, SiteConfig> = sites
            .into_iter()
            .map(|site| (site.name.clone(), site))
            .collect();
        let default_site = default_site.into();

        if let Some(site) = sites.values().find(|s| s.site_id.trim().is_empty()) {
            return Err(ClientError::Config(format!(
                "No site ID configured for '{}'",
                site.name
            )));
        }
        if !sites.contains_key(&default_site) {
            return Err(ClientError::Config(format!(
                "Default site '{default_site}' not found in configured sites"
            )));
        }

        Ok(Self {
            sites,
            default_site,
        })
    }

    /// The sites the integration ships with; default is "dev"
    pub fn builtin() -> Self {
        let sites = [
            SiteConfig::new("dev", "63a7b738-6d1c-447a-849a-fab973366a06")
                .with_display_name("Dev Sitex1077548723"),
            SiteConfig::new("kokofresh", "a57521a4-3ecd-40b8-852c-462f2af558d2"),
            SiteConfig::new("byte_catalyst", "bc24ec89-d58d-4b00-9c00-997dc4bb2025")
                .with_display_name("The Byte Catalyst | Impact Mentor"),
        ];

        Self {
            sites: sites.into_iter().map(|s| (s.name.clone(), s)).collect(),
            default_site: "dev".to_string(),
        }
    }

    /// Switch the default site
    pub fn with_default(mut self, name: impl Into<String>) -> ClientResult<Self> {
        let name = name.into();
        if !self.sites.contains_key(&name) {
            return Err(ClientError::Config(format!(
                "Default site '{name}' not found in configured sites"
            )));
        }
        self.default_site = name;
        Ok(self)
    }

    pub fn default_site(&self) -> &SiteConfig {
        // `new`/`with_default` guarantee the key exists
        &self.sites[&self.default_site]
    }

    pub fn get(&self, name: &str) -> Option<&SiteConfig> {
        self.sites.get(name)
    }

    pub fn by_site_id(&self, site_id: &str) -> Option<&SiteConfig> {
        self.sites.values().find(|s| s.site_id == site_id)
    }

    pub fn sites(&self) -> impl Iterator<Item = &SiteConfig> {
        self.sites.values()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Client configuration for the Wix catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://www.wixapis.com/stores/v3")
    pub base_url: String,

    /// Account-level API key, used for sites without their own key
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Known sites
    pub sites: SiteRegistry,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: 30,
            sites: SiteRegistry::builtin(),
        }
    }

    /// Set the account API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_sites(mut self, sites: SiteRegistry) -> Self {
        self.sites = sites;
        self
    }

    /// API key to present for `site_id`: the site's own key, else the account key.
    /// Unknown site IDs fall back to the account key.
    pub fn credential_for(&self, site_id: &str) -> Option<&str> {
        self.sites
            .by_site_id(site_id)
            .and_then(|s| s.api_key.as_deref())
            .or(self.api_key.as_deref())
    }

    /// Create a Wix client from this configuration
    pub fn build_client(&self) -> ClientResult<WixClient> {
        WixClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
