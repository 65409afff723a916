//! Item Sync - pushes ERP items into a Wix Stores catalog
//!
//! # Module layout
//!
//! ```text
//! item-sync/src/
//! ├── commands.rs  # operator commands (check, sync)
//! ├── core/        # configuration, errors
//! ├── host/        # host hook/store/reporter seams and bundled adapters
//! ├── sync/        # eligibility filter, field mapper, orchestrator
//! └── utils/       # logging
//! ```
//!
//! The host calls [`ItemLifecycleHooks`] after an item is saved; the
//! [`SyncOrchestrator`] pushes eligible items through a
//! [`wix_client::ProductCatalog`] and stores the returned product ID.

pub mod commands;
pub mod core;
pub mod host;
pub mod sync;
pub mod utils;

pub use core::{Config, ConfigError, HostError};
pub use host::{
    ErrorEntry, HookEvent, HostReporter, Indicator, ItemLifecycleHooks, ItemStore,
    JsonItemStore, Notification, TracingReporter,
};
pub use sync::{
    SkipReason, SyncFilter, SyncOperation, SyncOrchestrator, SyncOutcome, SyncSettings,
    is_eligible, map_to_product,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
