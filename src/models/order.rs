use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order record, keyed by `order_no` (e.g. "ORD00009998").
///
/// Line items and any other untyped source fields ride along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_no: String,
    pub customer_id: String,
    pub order_status: String,
    pub order_date_time: DateTime<Utc>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
