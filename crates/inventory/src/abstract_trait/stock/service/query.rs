use crate::domain::response::{
    api::ApiResponse, product::ProductResponse, stock::StockMovementResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStockQueryService = Arc<dyn StockQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockQueryServiceTrait {
    async fn find_movements(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<StockMovementResponse>>, ServiceError>;
    async fn find_low_stock(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}
