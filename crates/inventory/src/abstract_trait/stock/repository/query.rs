use crate::model::StockMovement as StockMovementModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockQueryRepository = Arc<dyn StockQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockQueryRepositoryTrait {
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<StockMovementModel>, RepositoryError>;
}
