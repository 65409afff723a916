// Test doubles for the host and remote seams

#![allow(dead_code)]

use async_trait::async_trait;
use item_sync::{
    ErrorEntry, HostError, HostReporter, Indicator, ItemStore, Notification, SyncOrchestrator,
};
use parking_lot::Mutex;
use shared::{Decimal, Item, WixProduct};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use wix_client::{ClientError, ClientResult, ProductCatalog};

pub const SITE_ID: &str = "site-test";

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    Create {
        site_id: String,
        payload: WixProduct,
    },
    Update {
        site_id: String,
        product_id: String,
        payload: WixProduct,
    },
}

/// Catalog that records calls and answers from a script.
/// Without a scripted answer, create returns `prod_<n>` and update echoes
/// the product ID.
#[derive(Default)]
pub struct FakeCatalog {
    calls: Mutex<Vec<CatalogCall>>,
    answers: Mutex<VecDeque<ClientResult<String>>>,
}

impl FakeCatalog {
    pub fn answer(&self, result: ClientResult<String>) {
        self.answers.lock().push_back(result);
    }

    pub fn fail_with_status(&self, status: u16, body: &str) {
        self.answer(Err(ClientError::RemoteSyncFailed {
            reason: format!("remote returned {status}"),
            status: Some(status),
            body: Some(body.to_string()),
        }));
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().clone()
    }

    fn next_answer(&self, fallback: String) -> ClientResult<String> {
        self.answers.lock().pop_front().unwrap_or(Ok(fallback))
    }
}

#[async_trait]
impl ProductCatalog for FakeCatalog {
    async fn create_product(&self, site_id: &str, payload: &WixProduct) -> ClientResult<String> {
        let n = {
            let mut calls = self.calls.lock();
            calls.push(CatalogCall::Create {
                site_id: site_id.to_string(),
                payload: payload.clone(),
            });
            calls.len()
        };
        self.next_answer(format!("prod_{n}"))
    }

    async fn update_product(
        &self,
        site_id: &str,
        product_id: &str,
        payload: &WixProduct,
    ) -> ClientResult<String> {
        self.calls.lock().push(CatalogCall::Update {
            site_id: site_id.to_string(),
            product_id: product_id.to_string(),
            payload: payload.clone(),
        });
        self.next_answer(product_id.to_string())
    }
}

/// Remote IDs keyed by item code
#[derive(Default)]
pub struct MemoryStore {
    ids: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
    fail: Mutex<bool>,
}

impl MemoryStore {
    pub fn remote_id(&self, item_code: &str) -> Option<String> {
        self.ids.lock().get(item_code).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }

    pub fn fail_writes(&self) {
        *self.fail.lock() = true;
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn set_remote_product_id(
        &self,
        item_code: &str,
        remote_id: &str,
    ) -> Result<(), HostError> {
        if *self.fail.lock() {
            return Err(HostError::Storage("database is read-only".into()));
        }
        *self.writes.lock() += 1;
        self.ids
            .lock()
            .insert(item_code.to_string(), remote_id.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    errors: Mutex<Vec<ErrorEntry>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingReporter {
    pub fn errors(&self) -> Vec<ErrorEntry> {
        self.errors.lock().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.notifications.lock().iter().map(|n| n.indicator).collect()
    }
}

impl HostReporter for RecordingReporter {
    fn log_error(&self, entry: ErrorEntry) {
        self.errors.lock().push(entry);
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

pub struct Harness {
    pub catalog: Arc<FakeCatalog>,
    pub store: Arc<MemoryStore>,
    pub reporter: Arc<RecordingReporter>,
    pub orchestrator: SyncOrchestrator,
}

pub fn harness() -> Harness {
    let catalog = Arc::new(FakeCatalog::default());
    let store = Arc::new(MemoryStore::default());
    let reporter = Arc::new(RecordingReporter::default());
    let orchestrator =
        SyncOrchestrator::new(catalog.clone(), store.clone(), reporter.clone(), SITE_ID);
    Harness {
        catalog,
        store,
        reporter,
        orchestrator,
    }
}

pub fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// An item that passes the eligibility filter
pub fn sellable(code: &str, rate: &str) -> Item {
    Item {
        item_name: format!("{code} name"),
        standard_rate: Some(d(rate)),
        is_sales_item: true,
        stock_uom: "Nos".to_string(),
        ..Item::new(code)
    }
}
