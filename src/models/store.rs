use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub owner_id: i64,
    pub average_rating: Decimal,
    pub total_ratings: i32,
    pub created_at: DateTime<Utc>,
}

/// Derived statistics for one store. Always a pure function of the store's
/// current rating rows; only the recomputation step writes these two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAggregate {
    pub average_rating: Decimal,
    pub total_ratings: i32,
}
