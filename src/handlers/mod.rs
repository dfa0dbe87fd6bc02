pub mod customers;
pub mod orders;
pub mod refunds;
pub mod transactions;

use axum::extract::State;
use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

/// Service banner with pointers to the generated documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Service name, version and documentation links"))
)]
pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Order Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "docs": "/docs",
            "redoc": "/redoc",
        })),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, description = "Liveness plus per-collection record counts"))
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "order-query-service",
            "records": {
                "customers": state.store.customer_count(),
                "orders": state.store.order_count(),
                "transactions": state.store.transaction_count(),
                "refunds": state.store.refund_count(),
            },
        })),
    )
}

/// Treat an absent or blank query parameter uniformly as "not supplied".
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
