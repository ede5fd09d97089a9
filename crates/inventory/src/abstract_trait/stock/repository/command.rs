use crate::{domain::requests::RecordMovementRequest, model::StockMovement as StockMovementModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockCommandRepository = Arc<dyn StockCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockCommandRepositoryTrait {
    /// Apply a movement atomically: the ledger insert and the balance
    /// update either both commit or neither does.
    async fn record_movement(
        &self,
        req: &RecordMovementRequest,
    ) -> Result<StockMovementModel, RepositoryError>;
}
