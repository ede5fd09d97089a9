use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::FindAllProducts, model::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: i32,
    name: String,
    description: Option<String>,
    quantity: i32,
    min_stock: i32,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
    total_count: i64,
}

impl From<ProductRow> for ProductModel {
    fn from(row: ProductRow) -> Self {
        ProductModel {
            product_id: row.product_id,
            name: row.name,
            description: row.description,
            quantity: row.quantity,
            min_stock: row.min_stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from_acquire(e)
        })?;

        let limit = req.page_size.max(1) as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.trim())
        };

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT
                p.product_id,
                p.name,
                p.description,
                p.quantity,
                p.min_stock,
                p.created_at,
                p.updated_at,
                COUNT(*) OVER() AS total_count
            FROM products p
            WHERE ($1::TEXT IS NULL OR p.name ILIKE '%' || $1 || '%')
            ORDER BY p.name ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(ProductModel::from).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self
            .db
            .acquire()
            .await
            .map_err(RepositoryError::from_acquire)?;

        let result = sqlx::query_as::<_, ProductModel>(
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
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_low_stock(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("📉 Fetching products below minimum stock");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from_acquire(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
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
            WHERE quantity < min_stock
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch low-stock products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }
}
