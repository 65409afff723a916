//! Shared types for the item sync workspace
//!
//! Data types used across crates: the host ERP item that triggers a sync
//! and the Wix catalog product it maps to.

pub mod models;
pub mod serde_helpers;

// Re-exports
pub use models::{Item, WixProduct};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
