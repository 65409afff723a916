//! Item → Wix product sync
//!
//! - [`filter`] - which items may be synced
//! - [`mapper`] - item fields to catalog payload
//! - [`orchestrator`] - hook handling, remote calls and reporting

pub mod filter;
pub mod mapper;
pub mod orchestrator;

pub use filter::{SkipReason, SyncFilter, is_eligible};
pub use mapper::{map_to_product, product_slug};
pub use orchestrator::{SyncOperation, SyncOrchestrator, SyncOutcome, SyncSettings};
