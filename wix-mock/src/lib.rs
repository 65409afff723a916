//! Mock Wix Stores catalog server
//!
//! Implements the subset of the catalog API the sync uses (create, update,
//! get, list) over an in-memory store, with injectable failures for tests.

pub mod api;
pub mod state;

pub use state::{Failure, MockState, StoredProduct};

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A mock server bound to an ephemeral local port; stops on drop
pub struct MockWixServer {
    base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockWixServer {
    pub async fn start() -> std::io::Result<Self> {
        Self::start_with(MockState::new()).await
    }

    pub async fn start_with(state: MockState) -> std::io::Result<Self> {
        let state = Arc::new(state);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = api::router(state.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Mock Wix server stopped: {e}");
            }
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn state(&self) -> &MockState {
        &self.state
    }
}

impl Drop for MockWixServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
