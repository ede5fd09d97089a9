use crate::domain::{
    requests::RecordMovementRequest,
    response::{api::ApiResponse, stock::StockMovementResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStockCommandService = Arc<dyn StockCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockCommandServiceTrait {
    async fn record_movement(
        &self,
        req: &RecordMovementRequest,
    ) -> Result<ApiResponse<StockMovementResponse>, ServiceError>;
}
