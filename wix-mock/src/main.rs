use std::sync::Arc;
use tracing::info;
use wix_mock::{MockState, api};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wix_mock=info,tower_http=info".into()),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let state = match std::env::var("WIX_API_KEY") {
        Ok(key) => MockState::new().with_api_key(key),
        Err(_) => MockState::new(),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Mock Wix catalog listening on {}", listener.local_addr()?);

    axum::serve(listener, api::router(Arc::new(state))).await
}
