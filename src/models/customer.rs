use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer record, keyed by both `email` and `customer_id`.
///
/// Fields beyond the typed ones (contact details and the like) are kept
/// verbatim in `extra` so the record serializes back exactly as loaded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
