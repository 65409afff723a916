use crate::state::{Failure, MockState, StoredProduct};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

const SITE_ID_HEADER: &str = "wix-site-id";

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn failure_response(failure: Failure) -> Response {
    match failure {
        Failure::Status(status, body) => (status, body).into_response(),
        Failure::MalformedBody => (StatusCode::OK, "<html>upstream hiccup</html>").into_response(),
        Failure::MissingId => Json(json!({ "product": {} })).into_response(),
    }
}

/// Check credentials and site header, then apply any queued failure.
/// Returns the requesting site ID.
fn guard(state: &MockState, headers: &HeaderMap) -> Result<String, Response> {
    state.record_request();

    let api_key = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    if !state.accepts(api_key) {
        return Err(error(StatusCode::UNAUTHORIZED, "Invalid API key"));
    }

    let site_id = headers
        .get(SITE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("")
        .trim();
    if site_id.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Missing wix-site-id header"));
    }

    if let Some(failure) = state.take_failure() {
        return Err(failure_response(failure));
    }

    Ok(site_id.to_string())
}

/// Extract `{product: {...}}`, requiring a name and a variant list
fn product_body(body: Value) -> Result<Map<String, Value>, Response> {
    let Some(Value::Object(product)) = body.get("product").cloned() else {
        return Err(error(StatusCode::BAD_REQUEST, "Missing product"));
    };
    if !product.get("name").is_some_and(Value::is_string) {
        return Err(error(StatusCode::BAD_REQUEST, "product.name is required"));
    }
    if !product
        .get("variantsInfo")
        .and_then(|v| v.get("variants"))
        .is_some_and(Value::is_array)
    {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "product.variantsInfo.variants is required",
        ));
    }
    Ok(product)
}

fn bump_revision(product: &Value) -> String {
    product
        .get("revision")
        .and_then(Value::as_str)
        .and_then(|r| r.parse::<u64>().ok())
        .map(|r| (r + 1).to_string())
        .unwrap_or_else(|| "1".to_string())
}

async fn create_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let site_id = match guard(&state, &headers) {
        Ok(site_id) => site_id,
        Err(resp) => return resp,
    };
    let mut product = match product_body(body) {
        Ok(product) => product,
        Err(resp) => return resp,
    };

    let id = state.next_id();
    product.insert("id".into(), Value::String(id.clone()));
    product.insert("revision".into(), Value::String("1".into()));
    let product = Value::Object(product);

    tracing::info!(site_id = %site_id, product_id = %id, "Mock product created");
    state.insert(
        id,
        StoredProduct {
            site_id,
            product: product.clone(),
        },
    );

    Json(json!({ "product": product })).into_response()
}

async fn update_product(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let site_id = match guard(&state, &headers) {
        Ok(site_id) => site_id,
        Err(resp) => return resp,
    };
    let existing = match state.product(&id) {
        Some(stored) if stored.site_id == site_id => stored,
        _ => return error(StatusCode::NOT_FOUND, "Product not found"),
    };
    let mut product = match product_body(body) {
        Ok(product) => product,
        Err(resp) => return resp,
    };

    product.insert("id".into(), Value::String(id.clone()));
    product.insert(
        "revision".into(),
        Value::String(bump_revision(&existing.product)),
    );
    let product = Value::Object(product);

    tracing::info!(site_id = %site_id, product_id = %id, "Mock product updated");
    state.insert(
        id,
        StoredProduct {
            site_id,
            product: product.clone(),
        },
    );

    Json(json!({ "product": product })).into_response()
}

async fn get_product(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let site_id = match guard(&state, &headers) {
        Ok(site_id) => site_id,
        Err(resp) => return resp,
    };
    match state.product(&id) {
        Some(stored) if stored.site_id == site_id => {
            Json(json!({ "product": stored.product })).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, "Product not found"),
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<usize>,
}

async fn list_products(
    State(state): State<Arc<MockState>>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Response {
    let site_id = match guard(&state, &headers) {
        Ok(site_id) => site_id,
        Err(resp) => return resp,
    };
    let mut products = state.products_for_site(&site_id);
    products.truncate(query.limit.unwrap_or(100));

    Json(json!({ "products": products })).into_response()
}

pub fn router(state: Arc<MockState>) -> Router {
    use tower::limit::ConcurrencyLimitLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/{id}", get(get_product).patch(update_product))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}
