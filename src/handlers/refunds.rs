use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::AppResult;
use crate::models::Refund;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/refund/order/{order_no}",
    tag = "refunds",
    params(("order_no" = String, Path, description = "Order number (e.g. ORD00009998)")),
    responses(
        (status = 200, description = "Refund attached to the order", body = Refund),
        (status = 404, description = "No refund for that order")
    )
)]
pub async fn refund_for_order(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> AppResult<Json<Refund>> {
    let refund = state.store.find_refund_for_order(&order_no)?;

    info!(order_no = %order_no, refund_id = %refund.refund_id, "Found refund for order");
    Ok(Json(refund.clone()))
}
