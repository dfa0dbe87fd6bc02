//! OpenAPI document served at `/api-docs/openapi.json` and rendered by the
//! Swagger UI (`/docs`) and Redoc (`/redoc`) viewers.

use utoipa::OpenApi;

use crate::models::{Customer, Order, Refund, Transaction};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Management API",
        description = "REST API for querying order management data",
    ),
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::customers::find_customer,
        crate::handlers::orders::find_order,
        crate::handlers::transactions::find_transaction,
        crate::handlers::transactions::transaction_for_order,
        crate::handlers::refunds::refund_for_order,
    ),
    components(schemas(Customer, Order, Transaction, Refund)),
    tags(
        (name = "customers", description = "Customer lookups"),
        (name = "orders", description = "Order lookups"),
        (name = "transactions", description = "Transaction lookups"),
        (name = "refunds", description = "Refund lookups"),
        (name = "meta", description = "Service info and health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_lookup_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/customer",
            "/api/order",
            "/api/transaction",
            "/api/transaction/order/{order_no}",
            "/api/refund/order/{order_no}",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path '{path}' in OpenAPI document"
            );
        }
    }

    #[test]
    fn document_registers_all_four_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components section");
        for schema in ["Customer", "Order", "Transaction", "Refund"] {
            assert!(
                components.schemas.contains_key(schema),
                "missing schema '{schema}'"
            );
        }
    }
}
