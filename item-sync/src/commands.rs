//! Operator commands behind the `item-sync` binary

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use wix_client::WixClient;

use crate::{
    Config, HookEvent, JsonItemStore, SyncOrchestrator, SyncOutcome, TracingReporter,
};

/// Counts from one pass over an item file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub total: usize,
    pub synced: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Validate configuration and reach the default site
pub async fn check(config: &Config) -> anyhow::Result<()> {
    config.validate().context("Wix configuration is invalid")?;
    let client = WixClient::new(&config.client_config()?)?;
    let site = client.config().sites.default_site();

    client
        .verify_connection(&site.site_id)
        .await
        .with_context(|| format!("Cannot reach Wix site '{}'", site.display_name))?;

    tracing::info!(site = %site.display_name, site_id = %site.site_id, "Wix connection OK");
    Ok(())
}

/// Run every item in `path` through the orchestrator, writing product IDs
/// back into the file.
///
/// With [`HookEvent::Updated`] items that already carry a product ID are
/// updated in place, so the file can be re-run safely.
pub async fn sync_file(
    config: &Config,
    path: impl AsRef<Path>,
    event: HookEvent,
) -> anyhow::Result<SyncSummary> {
    let path = path.as_ref();
    config.validate().context("Wix configuration is invalid")?;
    let client = WixClient::new(&config.client_config()?)?;
    let store = Arc::new(JsonItemStore::new(path));
    let documents = store
        .load_documents()
        .await
        .with_context(|| format!("Cannot read items from {}", path.display()))?;

    let orchestrator = SyncOrchestrator::new(
        Arc::new(client),
        store,
        Arc::new(TracingReporter),
        config.default_site_id()?,
    )
    .with_filter(config.filter())
    .with_settings(config.settings());

    let mut summary = SyncSummary {
        total: documents.len(),
        ..Default::default()
    };
    for doc in &documents {
        match orchestrator.dispatch(event, doc).await {
            SyncOutcome::Created { .. } | SyncOutcome::Updated { .. } => summary.synced += 1,
            SyncOutcome::Skipped(_) => summary.skipped += 1,
            SyncOutcome::Failed { .. } => summary.failed += 1,
        }
    }

    tracing::info!(
        total = summary.total,
        synced = summary.synced,
        skipped = summary.skipped,
        failed = summary.failed,
        "Sync finished"
    );
    Ok(summary)
}
