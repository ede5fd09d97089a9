use crate::{
    abstract_trait::{
        product::repository::DynProductQueryRepository,
        stock::{repository::DynStockQueryRepository, service::StockQueryServiceTrait},
    },
    domain::response::{api::ApiResponse, product::ProductResponse, stock::StockMovementResponse},
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::LedgerMetrics,
};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct StockQueryService {
    movement_query: DynStockQueryRepository,
    product_query: DynProductQueryRepository,
    metrics: LedgerMetrics,
}

impl StockQueryService {
    pub fn new(
        movement_query: DynStockQueryRepository,
        product_query: DynProductQueryRepository,
        metrics: LedgerMetrics,
    ) -> Self {
        Self {
            movement_query,
            product_query,
            metrics,
        }
    }
}

#[async_trait]
impl StockQueryServiceTrait for StockQueryService {
    async fn find_movements(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<StockMovementResponse>>, ServiceError> {
        info!("📜 Finding movements for product {product_id}");

        let movements = match self.movement_query.find_by_product(product_id).await {
            Ok(movements) => movements,
            Err(RepositoryError::Unavailable(reason)) => {
                warn!("⚠️ Storage unavailable, returning empty movement history: {reason}");
                Vec::new()
            }
            Err(err) => {
                error!("❌ Failed to fetch movements for product {product_id}: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        Ok(ApiResponse {
            status: "success".into(),
            message: "Movements retrieved successfully".into(),
            data: movements
                .into_iter()
                .map(StockMovementResponse::from)
                .collect(),
        })
    }

    async fn find_low_stock(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("📉 Finding products below minimum stock");

        let products = match self.product_query.find_low_stock().await {
            Ok(products) => {
                self.metrics.low_stock_products.set(products.len() as i64);
                products
            }
            Err(RepositoryError::Unavailable(reason)) => {
                warn!("⚠️ Storage unavailable, returning empty low-stock list: {reason}");
                Vec::new()
            }
            Err(err) => {
                error!("❌ Failed to fetch low-stock products: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        Ok(ApiResponse {
            status: "success".into(),
            message: "Low-stock products retrieved successfully".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }
}
