use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::models::Transaction;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TransactionQuery {
    /// Transaction ID to search for
    pub transaction_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/transaction",
    tag = "transactions",
    params(TransactionQuery),
    responses(
        (status = 200, description = "Matching transaction", body = Transaction),
        (status = 400, description = "transaction_id missing or blank"),
        (status = 404, description = "No transaction with that id")
    )
)]
pub async fn find_transaction(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> AppResult<Json<Transaction>> {
    let transaction_id = non_blank(query.transaction_id.as_deref())
        .ok_or_else(|| AppError::BadRequest("transaction_id must be provided".to_string()))?;

    let transaction = state.store.find_transaction(transaction_id)?;

    info!(transaction_id = %transaction.transaction_id, "Found transaction");
    Ok(Json(transaction.clone()))
}

/// A 404 here means the order has no transaction; the order itself may exist.
#[utoipa::path(
    get,
    path = "/api/transaction/order/{order_no}",
    tag = "transactions",
    params(("order_no" = String, Path, description = "Order number (e.g. ORD00009998)")),
    responses(
        (status = 200, description = "Transaction attached to the order", body = Transaction),
        (status = 404, description = "No transaction for that order")
    )
)]
pub async fn transaction_for_order(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> AppResult<Json<Transaction>> {
    let transaction = state.store.find_transaction_for_order(&order_no)?;

    info!(order_no = %order_no, transaction_id = %transaction.transaction_id, "Found transaction for order");
    Ok(Json(transaction.clone()))
}
