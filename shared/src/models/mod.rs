//! Data models
//!
//! `Item` is read from host documents; `WixProduct` is written to the
//! remote catalog API.

pub mod item;
pub mod product;

// Re-exports
pub use item::*;
pub use product::*;
