use crate::model::MovementType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordMovementRequest {
    #[validate(range(min = 1, message = "Product id is required"))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[serde(rename = "type")]
    pub movement_type: MovementType,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i32,

    #[serde(rename = "user_id")]
    pub user_id: Option<i32>,
}
