//! Mock catalog state

use axum::http::StatusCode;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned failure for the next catalog request
#[derive(Debug, Clone)]
pub enum Failure {
    /// Respond with this status and body
    Status(StatusCode, String),
    /// Respond 200 with a body that is not JSON
    MalformedBody,
    /// Respond 200 with a product that has no ID
    MissingId,
}

#[derive(Debug, Clone)]
pub struct StoredProduct {
    pub site_id: String,
    pub product: Value,
}

/// In-memory catalog shared by all handlers
#[derive(Debug, Default)]
pub struct MockState {
    products: DashMap<String, StoredProduct>,
    /// Accepted API keys; empty accepts any non-empty key
    api_keys: Vec<String>,
    failures: Mutex<VecDeque<Failure>>,
    next_ids: Mutex<VecDeque<String>>,
    requests: AtomicUsize,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept `api_key`
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_keys.push(api_key.into());
        self
    }

    pub fn accepts(&self, api_key: &str) -> bool {
        if self.api_keys.is_empty() {
            !api_key.trim().is_empty()
        } else {
            self.api_keys.iter().any(|k| k == api_key)
        }
    }

    /// Queue a failure for an upcoming request
    pub fn fail_next(&self, failure: Failure) {
        self.failures.lock().push_back(failure);
    }

    pub(crate) fn take_failure(&self) -> Option<Failure> {
        self.failures.lock().pop_front()
    }

    /// Queue the ID the next created product receives
    pub fn push_id(&self, id: impl Into<String>) {
        self.next_ids.lock().push_back(id.into());
    }

    pub(crate) fn next_id(&self) -> String {
        self.next_ids
            .lock()
            .pop_front()
            .unwrap_or_else(|| format!("prod_{}", uuid::Uuid::new_v4().simple()))
    }

    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of catalog requests received (including rejected ones)
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn insert(&self, id: impl Into<String>, stored: StoredProduct) {
        self.products.insert(id.into(), stored);
    }

    pub fn product(&self, id: &str) -> Option<StoredProduct> {
        self.products.get(id).map(|p| p.value().clone())
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn products_for_site(&self, site_id: &str) -> Vec<Value> {
        self.products
            .iter()
            .filter(|p| p.value().site_id == site_id)
            .map(|p| p.value().product.clone())
            .collect()
    }
}
