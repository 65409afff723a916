//! Sync orchestrator
//!
//! Runs one request-scoped sync per lifecycle event:
//!
//! ```text
//! hook ─► settings ─► filter ─► mapper ─► catalog create/update
//!                                            │
//!                           ok ◄─────────────┴─────────► err
//!                  store remote id                 error log entry
//!                  success notice                  failure notice
//! ```
//!
//! Nothing escapes to the caller: a failed sync must never roll back the
//! host's own save. Two saves of the same item racing each other are not
//! coordinated; whichever stores its product ID last wins.

use async_trait::async_trait;
use serde_json::Value;
use shared::Item;
use std::fmt;
use std::sync::Arc;
use wix_client::ProductCatalog;

use super::filter::{SkipReason, SyncFilter};
use super::mapper::map_to_product;
use crate::host::{
    ErrorEntry, HookEvent, HostReporter, ItemLifecycleHooks, ItemStore, Notification,
};

/// Which hooks are allowed to sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    pub enabled: bool,
    pub sync_on_create: bool,
    pub sync_on_update: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sync_on_create: true,
            sync_on_update: true,
        }
    }
}

impl SyncSettings {
    fn allows(&self, event: HookEvent) -> bool {
        self.enabled
            && match event {
                HookEvent::Created => self.sync_on_create,
                HookEvent::Updated => self.sync_on_update,
            }
    }
}

/// Remote catalog operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    Create,
    Update,
}

impl SyncOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
        }
    }
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Skipped(SkipReason),
    Created { remote_id: String },
    Updated { remote_id: String },
    Failed { operation: SyncOperation, error: String },
}

impl SyncOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            Self::Skipped(_) => "skipped",
            Self::Created { .. } | Self::Updated { .. } => "success",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn remote_id(&self) -> Option<&str> {
        match self {
            Self::Created { remote_id } | Self::Updated { remote_id } => Some(remote_id),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Pushes items to the remote catalog on host lifecycle events
pub struct SyncOrchestrator {
    catalog: Arc<dyn ProductCatalog>,
    store: Arc<dyn ItemStore>,
    reporter: Arc<dyn HostReporter>,
    site_id: String,
    filter: SyncFilter,
    settings: SyncSettings,
}

impl SyncOrchestrator {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        store: Arc<dyn ItemStore>,
        reporter: Arc<dyn HostReporter>,
        site_id: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            store,
            reporter,
            site_id: site_id.into(),
            filter: SyncFilter::default(),
            settings: SyncSettings::default(),
        }
    }

    pub fn with_filter(mut self, filter: SyncFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_settings(mut self, settings: SyncSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Entry point for raw host documents.
    ///
    /// A document that does not parse as an item is a mapping error: it is
    /// logged and reported like any other failure, unless the hook is
    /// switched off.
    pub async fn dispatch(&self, event: HookEvent, doc: &Value) -> SyncOutcome {
        match Item::from_document(doc) {
            Ok(item) => self.run(event, &item).await,
            Err(e) => {
                let item_code = doc
                    .get("item_code")
                    .or_else(|| doc.get("name"))
                    .and_then(Value::as_str)
                    .unwrap_or("<unknown>");
                let outcome = if !self.settings.allows(event) {
                    tracing::debug!(item_code, "Skipping Wix sync: sync disabled");
                    SyncOutcome::Skipped(SkipReason::SyncDisabled)
                } else {
                    self.fail(
                        event.operation(),
                        item_code,
                        format!("cannot read item document: {e}"),
                    )
                };
                log_activity(item_code, event.operation(), &outcome);
                outcome
            }
        }
    }

    async fn run(&self, event: HookEvent, item: &Item) -> SyncOutcome {
        let code = item.item_code.as_str();
        tracing::info!(item_code = code, event = ?event, "Starting Wix sync");

        let outcome = if !self.settings.allows(event) {
            SyncOutcome::Skipped(SkipReason::SyncDisabled)
        } else if let Err(reason) = self.filter.check(item) {
            SyncOutcome::Skipped(reason)
        } else {
            let payload = map_to_product(item);
            match (event, item.remote_product_id()) {
                (HookEvent::Updated, Some(remote_id)) => {
                    self.update(item, remote_id, &payload).await
                }
                (HookEvent::Updated, None) => {
                    tracing::info!(
                        item_code = code,
                        "No Wix product ID found, creating new product"
                    );
                    self.create(item, &payload).await
                }
                (HookEvent::Created, _) => self.create(item, &payload).await,
            }
        };

        if let SyncOutcome::Skipped(reason) = &outcome {
            tracing::debug!(item_code = code, %reason, "Skipping Wix sync");
        }
        let operation = match &outcome {
            SyncOutcome::Created { .. } => SyncOperation::Create,
            SyncOutcome::Updated { .. } => SyncOperation::Update,
            SyncOutcome::Failed { operation, .. } => *operation,
            SyncOutcome::Skipped(_) => event.operation(),
        };
        log_activity(code, operation, &outcome);
        outcome
    }

    async fn create(&self, item: &Item, payload: &shared::WixProduct) -> SyncOutcome {
        let code = item.item_code.as_str();
        let remote_id = match self.catalog.create_product(&self.site_id, payload).await {
            Ok(id) => id,
            Err(e) => return self.fail(SyncOperation::Create, code, e.detail()),
        };

        if let Err(e) = self.store.set_remote_product_id(code, &remote_id).await {
            return self.fail(
                SyncOperation::Create,
                code,
                format!("product {remote_id} created but storing its ID failed: {e}"),
            );
        }

        tracing::info!(item_code = code, remote_id = %remote_id, "Created Wix product");
        self.reporter.notify(Notification::success(
            "Wix Sync Success",
            format!(
                "Product '{}' successfully synced to Wix!\nWix Product ID: {remote_id}",
                item.display_name()
            ),
        ));
        SyncOutcome::Created { remote_id }
    }

    async fn update(
        &self,
        item: &Item,
        current_id: &str,
        payload: &shared::WixProduct,
    ) -> SyncOutcome {
        let code = item.item_code.as_str();
        let remote_id = match self
            .catalog
            .update_product(&self.site_id, current_id, payload)
            .await
        {
            Ok(id) => id,
            Err(e) => return self.fail(SyncOperation::Update, code, e.detail()),
        };

        if remote_id != current_id {
            if let Err(e) = self.store.set_remote_product_id(code, &remote_id).await {
                return self.fail(
                    SyncOperation::Update,
                    code,
                    format!("product updated as {remote_id} but storing its ID failed: {e}"),
                );
            }
        }

        tracing::info!(item_code = code, remote_id = %remote_id, "Updated Wix product");
        self.reporter.notify(Notification::success(
            "Wix Sync Success",
            format!("Product '{}' successfully updated in Wix!", item.display_name()),
        ));
        SyncOutcome::Updated { remote_id }
    }

    /// One error-log entry plus one failure notice
    fn fail(&self, operation: SyncOperation, item_code: &str, detail: String) -> SyncOutcome {
        tracing::error!(item_code, %operation, "Wix sync failed: {detail}");

        self.reporter.log_error(ErrorEntry {
            title: format!("Wix {} Error", operation.title()),
            message: format!("Wix {operation} operation failed for Item {item_code}: {detail}"),
        });
        self.reporter.notify(Notification::failure(
            "Wix Sync Error",
            format!("Failed to {operation} product in Wix. Please check the error log for details."),
        ));

        SyncOutcome::Failed {
            operation,
            error: detail,
        }
    }
}

#[async_trait]
impl ItemLifecycleHooks for SyncOrchestrator {
    async fn on_created(&self, item: &Item) -> SyncOutcome {
        self.run(HookEvent::Created, item).await
    }

    async fn on_updated(&self, item: &Item) -> SyncOutcome {
        self.run(HookEvent::Updated, item).await
    }
}

fn log_activity(item_code: &str, operation: SyncOperation, outcome: &SyncOutcome) {
    tracing::info!(
        target: "item_sync::activity",
        item_code,
        action = operation.as_str(),
        status = outcome.status(),
        remote_id = outcome.remote_id(),
        "Wix sync activity"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_gate_hooks() {
        let settings = SyncSettings {
            sync_on_update: false,
            ..Default::default()
        };
        assert!(settings.allows(HookEvent::Created));
        assert!(!settings.allows(HookEvent::Updated));

        let off = SyncSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(!off.allows(HookEvent::Created));
    }

    #[test]
    fn test_outcome_status() {
        let created = SyncOutcome::Created {
            remote_id: "p1".into(),
        };
        assert_eq!(created.status(), "success");
        assert_eq!(created.remote_id(), Some("p1"));
        assert_eq!(SyncOutcome::Skipped(SkipReason::Disabled).status(), "skipped");
        let failed = SyncOutcome::Failed {
            operation: SyncOperation::Update,
            error: "x".into(),
        };
        assert!(failed.is_failure());
        assert_eq!(failed.remote_id(), None);
    }
}
