use crate::model::StockMovement as StockMovementModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockMovementResponse {
    pub id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub quantity: i32,
    #[serde(rename = "user_id")]
    pub user_id: Option<i32>,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl From<StockMovementModel> for StockMovementResponse {
    fn from(value: StockMovementModel) -> Self {
        StockMovementResponse {
            id: value.movement_id,
            product_id: value.product_id,
            movement_type: value.movement_type,
            quantity: value.quantity,
            user_id: value.user_id,
            created_at: value.created_at.to_string(),
        }
    }
}
