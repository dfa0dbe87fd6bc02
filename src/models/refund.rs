use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Refund record, keyed by `order_no` (an order has at most one refund).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Refund {
    pub refund_id: String,
    pub order_no: String,
    pub transaction_id: String,
    pub refund_status: String,
    pub refund_amount: f64,
    pub refund_date_time: DateTime<Utc>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
