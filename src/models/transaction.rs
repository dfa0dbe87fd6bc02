use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment transaction, keyed by `transaction_id`. `order_no` is also unique
/// across the collection (an order has at most one transaction).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub transaction_id: String,
    pub order_no: String,
    pub customer_id: String,
    pub transaction_status: String,
    pub amount: f64,
    pub transaction_date_time: DateTime<Utc>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
