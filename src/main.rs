use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod docs;
mod error;
mod handlers;
mod loader;
mod models;
mod store;

use crate::config::Config;
use crate::docs::ApiDoc;
use crate::store::Store;

/// Shared application state — cheap to clone (the store sits behind an Arc and
/// is never written after startup).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,order_query_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Order Query Service — Rust + Axum   ║");
    info!("║  read-only lookups over JSON data    ║");
    info!("╚══════════════════════════════════════╝");

    // One-shot bulk load; the process does not come up over a partial dataset.
    info!("Loading data from {}...", config.data_dir.display());
    let (store, _report) = loader::load_store(&config.data_dir)?;

    let state = AppState {
        store: Arc::new(store),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("API docs: http://{}/docs  ·  http://{}/redoc", addr, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Meta ────────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Lookups ─────────────────────────────────────────────────────────
        .route("/api/customer", get(handlers::customers::find_customer))
        .route("/api/order", get(handlers::orders::find_order))
        .route(
            "/api/transaction",
            get(handlers::transactions::find_transaction),
        )
        .route(
            "/api/transaction/order/:order_no",
            get(handlers::transactions::transaction_for_order),
        )
        .route(
            "/api/refund/order/:order_no",
            get(handlers::refunds::refund_for_order),
        )

        // ── Generated documentation ─────────────────────────────────────────
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::{Customer, Order, Refund, Transaction};

    fn source_customer() -> Value {
        json!({
            "customer_id": "C1",
            "name": "Ada Lovelace",
            "email": "a@x.com",
            "phone": "+44 20 0000 0000"
        })
    }

    fn test_router() -> Router {
        let customers: Vec<Customer> =
            serde_json::from_value(json!([source_customer()])).unwrap();
        let orders: Vec<Order> = serde_json::from_value(json!([
            {
                "order_no": "O100",
                "customer_id": "C1",
                "order_status": "COMPLETED",
                "order_date_time": "2024-03-01T12:00:00Z",
                "items": [{"sku": "SKU-1", "qty": 2}]
            },
            {
                "order_no": "O200",
                "customer_id": "C1",
                "order_status": "PENDING",
                "order_date_time": "2024-03-02T12:00:00Z"
            }
        ]))
        .unwrap();
        let transactions: Vec<Transaction> = serde_json::from_value(json!([
            {
                "transaction_id": "T1",
                "order_no": "O100",
                "customer_id": "C1",
                "transaction_status": "SETTLED",
                "amount": 19.99,
                "transaction_date_time": "2024-03-01T12:05:00Z"
            }
        ]))
        .unwrap();
        let refunds: Vec<Refund> = serde_json::from_value(json!([
            {
                "refund_id": "R1",
                "order_no": "O100",
                "transaction_id": "T1",
                "refund_status": "PROCESSED",
                "refund_amount": 19.99,
                "refund_date_time": "2024-03-02T09:00:00Z"
            }
        ]))
        .unwrap();

        let store = Store::new(customers, orders, transactions, refunds).unwrap();
        build_router(AppState {
            store: Arc::new(store),
        })
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    // ── Customers ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn customer_by_email_round_trips_the_source_record() {
        let (status, body) = get_json(test_router(), "/api/customer?email=a@x.com").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, source_customer());
    }

    #[tokio::test]
    async fn customer_by_id() {
        let (status, body) = get_json(test_router(), "/api/customer?customer_id=C1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@x.com");
    }

    #[tokio::test]
    async fn unknown_customer_email_is_404() {
        let (status, body) = get_json(test_router(), "/api/customer?email=missing@x.com").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn customer_without_keys_is_400() {
        let (status, body) = get_json(test_router(), "/api/customer").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("email or customer_id"));
    }

    #[tokio::test]
    async fn blank_customer_keys_count_as_absent() {
        let (status, _) = get_json(test_router(), "/api/customer?email=&customer_id=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ── Orders ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn order_by_number() {
        let (status, body) = get_json(test_router(), "/api/order?order_no=O100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["order_status"], "COMPLETED");
        assert_eq!(body["items"][0]["sku"], "SKU-1");
    }

    #[tokio::test]
    async fn unknown_order_is_404() {
        let (status, _) = get_json(test_router(), "/api/order?order_no=O999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn order_without_number_is_400() {
        let (status, _) = get_json(test_router(), "/api/order").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ── Transactions ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn transaction_by_id() {
        let (status, body) =
            get_json(test_router(), "/api/transaction?transaction_id=T1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["order_no"], "O100");
    }

    #[tokio::test]
    async fn transaction_by_order() {
        let (status, body) = get_json(test_router(), "/api/transaction/order/O100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction_id"], "T1");
    }

    #[tokio::test]
    async fn order_without_transaction_is_404() {
        // O200 is a real order but was never paid.
        let (status, _) = get_json(test_router(), "/api/transaction/order/O200").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_json(test_router(), "/api/order?order_no=O200").await;
        assert_eq!(status, StatusCode::OK);
    }

    // ── Refunds ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn refund_by_order() {
        let (status, body) = get_json(test_router(), "/api/refund/order/O100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["refund_id"], "R1");
    }

    #[tokio::test]
    async fn order_without_refund_is_404() {
        let (status, _) = get_json(test_router(), "/api/refund/order/O200").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // ── Meta ──────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn root_points_at_the_docs() {
        let (status, body) = get_json(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Order Management API");
        assert_eq!(body["docs"], "/docs");
        assert_eq!(body["redoc"], "/redoc");
    }

    #[tokio::test]
    async fn health_reports_record_counts() {
        let (status, body) = get_json(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["records"]["customers"], 1);
        assert_eq!(body["records"]["orders"], 2);
        assert_eq!(body["records"]["transactions"], 1);
        assert_eq!(body["records"]["refunds"], 1);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = get_json(test_router(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/customer"].is_object());
    }

    #[tokio::test]
    async fn lookups_are_repeatable() {
        let router = test_router();
        let (_, first) = get_json(router.clone(), "/api/order?order_no=O100").await;
        let (_, second) = get_json(router, "/api/order?order_no=O100").await;
        assert_eq!(first, second);
    }
}
