use wix_client::{ClientConfig, DEFAULT_BASE_URL, SiteConfig, SiteRegistry};

use super::ConfigError;
use crate::sync::{SyncFilter, SyncSettings};

/// Item sync configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WIX_ENABLED | true | master switch |
/// | WIX_SYNC_ON_CREATE | true | sync when an item is created |
/// | WIX_SYNC_ON_UPDATE | true | sync when an item is updated |
/// | WIX_DEFAULT_SITE | dev | short name of the target site |
/// | WIX_SITES | built-in table | `name=site_id,...` |
/// | WIX_API_KEY | - | account API key |
/// | WIX_BASE_URL | https://www.wixapis.com/stores/v3 | catalog API base |
/// | WIX_REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | WIX_EXCLUDED_ITEM_GROUPS | - | comma separated item groups never synced |
/// | LOG_LEVEL | info | log filter |
/// | LOG_DIR | - | daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// WIX_API_KEY=... WIX_DEFAULT_SITE=kokofresh item-sync check
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub enabled: bool,
    pub sync_on_create: bool,
    pub sync_on_update: bool,
    /// Short name of the site products are pushed to
    pub default_site: String,
    pub sites: Vec<SiteConfig>,
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub excluded_item_groups: Vec<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let flag = |key: &str| var(key).and_then(|v| parse_flag(&v)).unwrap_or(true);

        Self {
            enabled: flag("WIX_ENABLED"),
            sync_on_create: flag("WIX_SYNC_ON_CREATE"),
            sync_on_update: flag("WIX_SYNC_ON_UPDATE"),
            default_site: var("WIX_DEFAULT_SITE").unwrap_or_else(|| "dev".into()),
            sites: var("WIX_SITES")
                .map(|v| parse_sites(&v))
                .unwrap_or_else(|| SiteRegistry::builtin().sites().cloned().collect()),
            api_key: var("WIX_API_KEY"),
            base_url: var("WIX_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            request_timeout_secs: var("WIX_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(30),
            excluded_item_groups: var("WIX_EXCLUDED_ITEM_GROUPS")
                .map(|v| split_list(&v).map(str::to_string).collect())
                .unwrap_or_default(),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        }
    }

    /// Check the integration can run: enabled, a non-zero request timeout,
    /// and a default site with a site ID and an API key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Err(ConfigError::Disabled);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "WIX_REQUEST_TIMEOUT_SECS",
                value: "0".into(),
            });
        }
        self.default_site_config()?;
        Ok(())
    }

    fn default_site_config(&self) -> Result<&SiteConfig, ConfigError> {
        if let Some(site) = self.sites.iter().find(|s| s.site_id.trim().is_empty()) {
            return Err(ConfigError::MissingSiteId(site.name.clone()));
        }
        let site = self
            .sites
            .iter()
            .find(|s| s.name == self.default_site)
            .ok_or_else(|| ConfigError::UnknownDefaultSite(self.default_site.clone()))?;
        if site.api_key.is_none() && self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey(site.name.clone()));
        }
        Ok(site)
    }

    /// Site ID of the default site
    pub fn default_site_id(&self) -> Result<&str, ConfigError> {
        Ok(&self.default_site_config()?.site_id)
    }

    /// Build the HTTP client configuration
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let sites = SiteRegistry::new(self.sites.iter().cloned(), self.default_site.as_str())
            .map_err(|e| ConfigError::InvalidValue {
                key: "WIX_SITES",
                value: e.to_string(),
            })?;

        let mut config = ClientConfig::new(self.base_url.as_str())
            .with_timeout(self.request_timeout_secs)
            .with_sites(sites);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.as_str());
        }
        Ok(config)
    }

    pub fn filter(&self) -> SyncFilter {
        SyncFilter::new().with_excluded_groups(self.excluded_item_groups.iter().cloned())
    }

    pub fn settings(&self) -> SyncSettings {
        SyncSettings {
            enabled: self.enabled,
            sync_on_create: self.sync_on_create,
            sync_on_update: self.sync_on_update,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// `name=site_id` pairs; an entry without `=` keeps an empty site ID so
/// validation can name it
fn parse_sites(value: &str) -> Vec<SiteConfig> {
    split_list(value)
        .map(|entry| match entry.split_once('=') {
            Some((name, site_id)) => SiteConfig::new(name.trim(), site_id.trim()),
            None => SiteConfig::new(entry, ""),
        })
        .collect()
}
