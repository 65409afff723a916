//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote call did not produce a usable answer: network failure,
    /// non-success status, or a response without a product identifier
    #[error("Remote sync failed: {reason}")]
    RemoteSyncFailed {
        reason: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// Payload rejected before sending
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Client misconfigured (unknown site, missing credential, bad TLS setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn status(status: reqwest::StatusCode, body: String) -> Self {
        Self::RemoteSyncFailed {
            reason: format!("remote returned {status}"),
            status: Some(status.as_u16()),
            body: (!body.is_empty()).then_some(body),
        }
    }

    pub(crate) fn malformed(
        reason: impl Into<String>,
        status: reqwest::StatusCode,
        body: String,
    ) -> Self {
        Self::RemoteSyncFailed {
            reason: format!("malformed response: {}", reason.into()),
            status: Some(status.as_u16()),
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// HTTP status returned by the remote, if a response was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::RemoteSyncFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Response body returned by the remote, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::RemoteSyncFailed { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub fn is_remote_sync_failure(&self) -> bool {
        matches!(self, Self::RemoteSyncFailed { .. })
    }

    /// Error text including the remote response body, for error logs
    pub fn detail(&self) -> String {
        match self.response_body() {
            Some(body) => format!("{self}\nResponse: {body}"),
            None => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::RemoteSyncFailed {
            reason: format!("request failed: {e}"),
            status: e.status().map(|s| s.as_u16()),
            body: None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_error_carries_status_and_body() {
        let err = ClientError::status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(err.is_remote_sync_failure());
        assert_eq!(err.http_status(), Some(500));
        assert_eq!(err.response_body(), Some("boom"));
        assert!(err.detail().ends_with("Response: boom"));
    }

    #[test]
    fn test_empty_body_is_none() {
        let err = ClientError::status(StatusCode::BAD_GATEWAY, String::new());
        assert_eq!(err.response_body(), None);
        assert_eq!(err.detail(), err.to_string());
    }

    #[test]
    fn test_config_error_is_not_remote() {
        let err = ClientError::Config("no site".into());
        assert!(!err.is_remote_sync_failure());
        assert_eq!(err.http_status(), None);
    }
}
