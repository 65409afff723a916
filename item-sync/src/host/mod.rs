//! Host framework seams
//!
//! The orchestrator never touches the host ERP directly. The host
//! integration layer implements [`ItemStore`] and [`HostReporter`] and calls
//! [`ItemLifecycleHooks`] after an item is committed.

mod json_store;
mod reporter;

pub use json_store::JsonItemStore;
pub use reporter::TracingReporter;

use async_trait::async_trait;
use shared::Item;

use crate::core::HostError;
use crate::sync::{SyncOperation, SyncOutcome};

/// Host lifecycle event that triggers a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// Fired after an item insert is committed
    Created,
    /// Fired after any item update is committed
    Updated,
}

impl HookEvent {
    /// Catalog operation this event would normally lead to
    pub fn operation(self) -> SyncOperation {
        match self {
            Self::Created => SyncOperation::Create,
            Self::Updated => SyncOperation::Update,
        }
    }
}

/// Callbacks the host binds to its item lifecycle.
///
/// Implementations never fail the host's own save: every problem is
/// reported through the returned outcome.
#[async_trait]
pub trait ItemLifecycleHooks: Send + Sync {
    async fn on_created(&self, item: &Item) -> SyncOutcome;
    async fn on_updated(&self, item: &Item) -> SyncOutcome;
}

/// Host field storage for the remote product ID
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist `remote_id` on the item without firing its update hook
    async fn set_remote_product_id(&self, item_code: &str, remote_id: &str)
    -> Result<(), HostError>;
}

/// Colour of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Green,
    Red,
}

/// Transient message shown to the user who saved the item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub indicator: Indicator,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            indicator: Indicator::Green,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            indicator: Indicator::Red,
        }
    }
}

/// Entry for the host's persistent error log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub title: String,
    pub message: String,
}

/// Host error log and user notifications
pub trait HostReporter: Send + Sync {
    fn log_error(&self, entry: ErrorEntry);
    fn notify(&self, notification: Notification);
}
