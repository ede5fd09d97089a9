use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::ProductResponse,
        },
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        info!(
            "🔍 Finding products | Page: {}, Size: {}, Search: '{}'",
            page, page_size, req.search
        );

        let normalized = FindAllProducts {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (products, total) = match self.query.find_all(&normalized).await {
            Ok(res) => res,
            Err(RepositoryError::Unavailable(reason)) => {
                warn!("⚠️ Storage unavailable, returning empty product list: {reason}");
                (Vec::new(), 0)
            }
            Err(err) => {
                error!("❌ Failed to fetch products: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        let total_pages = if total == 0 {
            0
        } else {
            ((total + page_size as i64 - 1) / page_size as i64) as i32
        };

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Products retrieved successfully".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total,
                total_pages,
            },
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let product = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product retrieved successfully".into(),
            data: product.into(),
        })
    }
}
