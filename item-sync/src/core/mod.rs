//! Core module: configuration and error definitions
//!
//! - [`Config`] - environment-driven configuration
//! - [`HostError`] - host adapter errors
//! - [`ConfigError`] - configuration validation errors

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, HostError};
