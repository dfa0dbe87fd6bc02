use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::error::AppResult;
use crate::handlers::non_blank;
use crate::models::Customer;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CustomerQuery {
    /// Customer email address
    pub email: Option<String>,
    /// Customer ID
    pub customer_id: Option<String>,
}

/// Find a customer by email or customer id. Either key alone is enough; when
/// both are supplied the customer id wins and the email is the fallback.
#[utoipa::path(
    get,
    path = "/api/customer",
    tag = "customers",
    params(CustomerQuery),
    responses(
        (status = 200, description = "Matching customer", body = Customer),
        (status = 400, description = "Neither email nor customer_id supplied"),
        (status = 404, description = "No customer matches the supplied keys")
    )
)]
pub async fn find_customer(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Customer>> {
    let email = non_blank(query.email.as_deref());
    let customer_id = non_blank(query.customer_id.as_deref());

    let customer = state.store.find_customer(email, customer_id)?;

    info!(customer_id = %customer.customer_id, "Found customer");
    Ok(Json(customer.clone()))
}
