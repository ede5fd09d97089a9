use crate::{
    abstract_trait::stock::repository::StockQueryRepositoryTrait,
    model::StockMovement as StockMovementModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct StockQueryRepository {
    db: ConnectionPool,
}

impl StockQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockQueryRepositoryTrait for StockQueryRepository {
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<StockMovementModel>, RepositoryError> {
        info!("📜 Fetching movement history for product {}", product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from_acquire(e)
        })?;

        let movements = sqlx::query_as::<_, StockMovementModel>(
            r#"
            SELECT
                movement_id,
                product_id,
                movement_type,
                quantity,
                user_id,
                created_at
            FROM stock_movements
            WHERE product_id = $1
            ORDER BY created_at ASC, movement_id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch movements for product {}: {:?}",
                product_id, e
            );
            RepositoryError::from(e)
        })?;

        Ok(movements)
    }
}
