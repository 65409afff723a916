use thiserror::Error;

/// Errors raised by host adapters
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Item {0} not found")]
    ItemNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid item document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Configuration problems found by [`crate::Config::validate`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Wix integration is disabled")]
    Disabled,

    #[error("Default site '{0}' not found in configured sites")]
    UnknownDefaultSite(String),

    #[error("No site ID configured for '{0}'")]
    MissingSiteId(String),

    #[error("No API key available for site '{0}'")]
    MissingApiKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
