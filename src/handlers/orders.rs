use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::models::Order;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderQuery {
    /// Order number (e.g. ORD00009998)
    pub order_no: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/order",
    tag = "orders",
    params(OrderQuery),
    responses(
        (status = 200, description = "Matching order", body = Order),
        (status = 400, description = "order_no missing or blank"),
        (status = 404, description = "No order with that number")
    )
)]
pub async fn find_order(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Order>> {
    let order_no = non_blank(query.order_no.as_deref())
        .ok_or_else(|| AppError::BadRequest("order_no must be provided".to_string()))?;

    let order = state.store.find_order(order_no)?;

    info!(order_no = %order.order_no, "Found order");
    Ok(Json(order.clone()))
}
