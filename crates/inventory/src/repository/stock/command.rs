use crate::{
    abstract_trait::stock::repository::StockCommandRepositoryTrait,
    domain::requests::RecordMovementRequest,
    model::{MovementType, Product as ProductModel, StockMovement as StockMovementModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct StockCommandRepository {
    db: ConnectionPool,
}

impl StockCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for StockCommandRepository {
    async fn record_movement(
        &self,
        req: &RecordMovementRequest,
    ) -> Result<StockMovementModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from_acquire)?;

        // FOR UPDATE serializes concurrent movements on the same product;
        // movements on other products are untouched by this lock.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                product_id,
                name,
                description,
                quantity,
                min_stock,
                created_at,
                updated_at
            FROM products
            WHERE product_id = $1
            FOR UPDATE
            "#,
        )
        .bind(req.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from_transaction)?
        .ok_or(RepositoryError::NotFound)?;

        let new_quantity = match req.movement_type {
            MovementType::Entrada => product.quantity + req.quantity,
            MovementType::Saida => {
                if req.quantity > product.quantity {
                    // Early return drops the transaction: nothing is written.
                    return Err(RepositoryError::InsufficientStock {
                        available: product.quantity,
                    });
                }
                product.quantity - req.quantity
            }
        };

        let movement = sqlx::query_as::<_, StockMovementModel>(
            r#"
        INSERT INTO stock_movements (product_id, movement_type, quantity, user_id, created_at)
        VALUES ($1, $2, $3, $4, current_timestamp)
        RETURNING movement_id, product_id, movement_type, quantity, user_id, created_at
        "#,
        )
        .bind(req.product_id)
        .bind(req.movement_type.as_str())
        .bind(req.quantity)
        .bind(req.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert movement for product {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from_transaction(err)
        })?;

        sqlx::query(
            r#"
            UPDATE products
            SET quantity   = $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            "#,
        )
        .bind(req.product_id)
        .bind(new_quantity)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update balance for product {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from_transaction(err)
        })?;

        tx.commit()
            .await
            .map_err(RepositoryError::from_transaction)?;

        info!(
            "✅ Recorded {} of {} for product {} (balance {} -> {})",
            movement.movement_type, movement.quantity, movement.product_id,
            product.quantity, new_quantity
        );
        Ok(movement)
    }
}
