use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self
            .db
            .acquire()
            .await
            .map_err(RepositoryError::from_acquire)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
        INSERT INTO products (name, description, quantity, min_stock, created_at, updated_at)
        VALUES ($1, $2, 0, $3, current_timestamp, current_timestamp)
        RETURNING product_id, name, description, quantity, min_stock, created_at, updated_at
        "#,
        )
        .bind(req.name.trim())
        .bind(req.description.as_deref())
        .bind(req.min_stock)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product '{}': {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} '{}'",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product_id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("product id is required".into()))?;

        let mut conn = self
            .db
            .acquire()
            .await
            .map_err(RepositoryError::from_acquire)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
        UPDATE products
        SET name        = COALESCE($2, name),
            description = COALESCE($3, description),
            min_stock   = COALESCE($4, min_stock),
            updated_at  = current_timestamp
        WHERE product_id = $1
        RETURNING product_id, name, description, quantity, min_stock, created_at, updated_at
        "#,
        )
        .bind(product_id)
        .bind(req.name.as_deref().map(str::trim))
        .bind(req.description.as_deref())
        .bind(req.min_stock)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from_acquire)?;

        // Products with ledger history cannot be deleted; the FK RESTRICT
        // backs this check.
        let movement_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM stock_movements WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if movement_count > 0 {
            return Err(RepositoryError::Conflict(format!(
                "product {id} has {movement_count} recorded movements"
            )));
        }

        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE product_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }
}
